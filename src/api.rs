//! 对外的简化接口
//!
//! 直接返回内存文档或 JSON 字符串，供宿主程序调用

use std::path::Path;

use crate::error::ImportResult;
use crate::models::{ImportConf, ScreenplayDocument};
use crate::parser::FountainImporter;

/// 导入Fountain文本
pub fn import_fountain_text(text: &str, config: Option<ImportConf>) -> ScreenplayDocument {
    let mut importer = FountainImporter::new(config.unwrap_or_default());
    let mut document = ScreenplayDocument::new();
    importer.import_text(text, &mut document);
    document
}

/// 导入Fountain文件
pub fn import_fountain_file<P: AsRef<Path>>(path: P, config: Option<ImportConf>) -> ImportResult<ScreenplayDocument> {
    let mut importer = FountainImporter::new(config.unwrap_or_default());
    let mut document = ScreenplayDocument::new();
    importer.import_file(path, &mut document)?;
    Ok(document)
}

/// 导入Fountain文本并返回JSON格式结果
pub fn import_fountain_json(text: &str, config: Option<ImportConf>) -> String {
    let document = import_fountain_text(text, config);
    serde_json::to_string(&document).unwrap_or_else(|_| "{}".to_string())
}
