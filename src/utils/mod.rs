pub mod fountain_constants;

use unicode_segmentation::UnicodeSegmentation;

pub use fountain_constants::{FountainConstants, LINE_REGEX};

/// 删除行内所有样式标记（`_` `*` `^`），不区分是否成对出现
pub fn strip_emphasis(text: &str) -> String {
    text.chars()
        .filter(|c| !FountainConstants::EMPHASIS_MARKERS.contains(c))
        .collect()
}

/// 判断一行是否为角色名，是则返回角色名
///
/// `@` 开头的行强制视为角色名（去掉 `@`）。否则要求首字符为拉丁文字，
/// 且行内没有任何小写字母；非拉丁文字的角色名必须用 `@` 显式标记。
pub fn character_cue_name(text: &str) -> Option<String> {
    if let Some(rest) = text.strip_prefix('@') {
        return Some(rest.trim().to_string());
    }

    if !LINE_REGEX.latin_start.is_match(text) {
        return None;
    }

    if LINE_REGEX.lowercase_letter.is_match(text) {
        return None;
    }

    Some(text.to_string())
}

/// 去掉首尾括号，返回括号内文本。不是 `(...)` 形式则返回 None
pub fn strip_parentheses(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('(') && text.ends_with(')') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

/// 场景标题用的地点缩写：超过 25 个字符时保留前 22 个并加 "..."
pub fn truncate_location(location: &str) -> String {
    let graphemes: Vec<&str> = location.graphemes(true).collect();
    if graphemes.len() > FountainConstants::TITLE_LOCATION_MAX {
        let mut short: String = graphemes[..FountainConstants::TITLE_LOCATION_KEEP].concat();
        short.push_str("...");
        short
    } else {
        location.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_marker() {
        assert_eq!(strip_emphasis("*bold* _under_ ^dual"), "bold under dual");
        assert_eq!(strip_emphasis("a*b"), "ab");
    }

    #[test]
    fn latin_uppercase_is_character() {
        assert_eq!(character_cue_name("JOHN"), Some("JOHN".to_string()));
        assert_eq!(character_cue_name("JOHN (V.O.)"), Some("JOHN (V.O.)".to_string()));
        assert_eq!(character_cue_name("John"), None);
    }

    #[test]
    fn non_latin_needs_at_prefix() {
        assert_eq!(character_cue_name("顾清"), None);
        assert_eq!(character_cue_name("@顾清"), Some("顾清".to_string()));
        // 首字符是数字（通用文字），不算拉丁文字
        assert_eq!(character_cue_name("2ND MAN"), None);
    }

    #[test]
    fn parentheses() {
        assert_eq!(strip_parentheses("(smiling)"), Some("smiling"));
        assert_eq!(strip_parentheses("()"), Some(""));
        assert_eq!(strip_parentheses("("), None);
        assert_eq!(strip_parentheses("(open"), None);
    }

    #[test]
    fn truncates_long_locations() {
        assert_eq!(truncate_location("HOUSE"), "HOUSE");
        let exact = "A".repeat(25);
        assert_eq!(truncate_location(&exact), exact);
        let long = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        assert_eq!(truncate_location(long), "ABCDEFGHIJKLMNOPQRSTUV...");
    }
}
