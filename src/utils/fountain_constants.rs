use lazy_static::lazy_static;
use regex::Regex;

use crate::models::SceneColor;

pub struct FountainConstants;

impl FountainConstants {
    /// 场景与注解的固定调色板，按编号取模循环使用
    pub const COLOR_PALETTE: [SceneColor; 6] = [
        SceneColor::Purple,
        SceneColor::Blue,
        SceneColor::Orange,
        SceneColor::Red,
        SceneColor::Brown,
        SceneColor::Gray,
    ];

    /// 场景标题提示词表。默认只有第一个 (INT) 真正触发标题识别
    pub const HEADING_HINTS: [&'static str; 6] = ["INT", "EXT", "EST", "INT./EXT", "INT/EXT", "I/E"];

    // 同一组提示词，按长度从长到短排列，拆分标题时用
    pub const HEADING_HINTS_LONGEST_FIRST: [&'static str; 6] = ["INT./EXT", "INT/EXT", "INT", "EXT", "EST", "I/E"];

    // 需要统一删除的样式标记
    pub const EMPHASIS_MARKERS: [char; 3] = ['_', '*', '^'];

    pub const DEFAULT_LOCATION_TYPE: &'static str = "I/E";
    pub const DEFAULT_MOMENT: &'static str = "DAY";

    /// 场景标题里地点超过该长度时截断
    pub const TITLE_LOCATION_MAX: usize = 25;
    pub const TITLE_LOCATION_KEEP: usize = 22;

    pub fn palette_color(index: usize) -> SceneColor {
        Self::COLOR_PALETTE[index % Self::COLOR_PALETTE.len()]
    }
}

lazy_static! {
    // 行级判定正则
    pub static ref LINE_REGEX: LineRegex = LineRegex {
        latin_start: Regex::new(r"^\p{Latin}").unwrap(),
        lowercase_letter: Regex::new(r"\p{Ll}").unwrap(),
        title_page: Regex::new(r"(?i)^(title|author|version|contact):(.*)$").unwrap(),
        transition: Regex::new(r"(?i)TO:$").unwrap(),
        moment_split: Regex::new(r"^(.*)[\-–—−](.*)$").unwrap(),
    };
}

pub struct LineRegex {
    /// 首字符是否为拉丁文字
    pub latin_start: Regex,
    /// 小写字母
    pub lowercase_letter: Regex,
    /// 标题页字段 `Key: value`
    pub title_page: Regex,
    /// 以 TO: 结尾的转场
    pub transition: Regex,
    /// 地点与时间的分隔（最后一个横线）
    pub moment_split: Regex,
}
