use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ImportResult;
use crate::utils::FountainConstants;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConf {
    /// 是否启用全部场景标题提示词（INT、EXT、EST、INT./EXT、INT/EXT、I/E）。
    /// 默认只认 INT，与旧版导入行为保持一致
    pub honor_all_heading_hints: bool,
    /// 第一个场景缺少内外景类型时使用
    pub default_location_type: String,
    /// 第一个场景缺少时间时使用
    pub default_moment: String,
}

impl Default for ImportConf {
    fn default() -> Self {
        ImportConf {
            honor_all_heading_hints: false,
            default_location_type: FountainConstants::DEFAULT_LOCATION_TYPE.to_string(),
            default_moment: FountainConstants::DEFAULT_MOMENT.to_string(),
        }
    }
}

impl ImportConf {
    /// 从 JSON 文件读取配置，缺省字段取默认值
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let text = fs::read_to_string(path)?;
        let conf = serde_json::from_str(&text)?;
        Ok(conf)
    }
}
