//! 场景标题解析与场景标题/颜色生成

use crate::models::{ImportConf, SceneColor, SceneHeading};
use crate::utils::{truncate_location, FountainConstants, LINE_REGEX};

/// 从标题行中直接取得的字段，缺失的字段稍后由上一场景继承
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadingParts {
    pub location_type: Option<String>,
    pub location: String,
    pub moment: Option<String>,
}

impl HeadingParts {
    /// `.` 开头走强制标题格式，否则按 `TYPE. LOCATION - MOMENT` 习惯格式解析
    pub fn parse(line: &str) -> Self {
        match line.strip_prefix('.') {
            Some(rest) => parse_forced_heading(rest),
            None => parse_hinted_heading(line),
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let t = text.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

// .TYPE. LOCATION - MOMENT：第一个 '-' 之后为时间，剩余部分第一个 '.' 之前为类型
fn parse_forced_heading(text: &str) -> HeadingParts {
    let (rest, moment) = match text.split_once('-') {
        Some((rest, moment)) => (rest, non_empty(moment)),
        None => (text, None),
    };

    let (location_type, location) = match rest.split_once('.') {
        Some((loc_type, location)) => (non_empty(loc_type), location),
        None => (None, rest),
    };

    HeadingParts {
        location_type,
        location: location.trim().to_string(),
        moment,
    }
}

// 按长度从长到短匹配提示词，避免 INT./EXT 被当成 INT
fn match_hint(line: &str) -> Option<(&'static str, &str)> {
    FountainConstants::HEADING_HINTS_LONGEST_FIRST.iter().find_map(|hint| {
        let head = line.get(..hint.len())?;
        if !head.eq_ignore_ascii_case(hint) {
            return None;
        }
        let rest = &line[hint.len()..];
        let rest = rest.strip_prefix('.').unwrap_or(rest);
        // 提示词后面必须是分隔符，INTERIOR 不算 INT
        if rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.len() < line.len() - hint.len() {
            Some((*hint, rest))
        } else {
            None
        }
    })
}

fn parse_hinted_heading(line: &str) -> HeadingParts {
    let line = line.trim();

    let (location_type, rest) = match match_hint(line) {
        Some((hint, rest)) => (Some(hint.to_string()), rest),
        None => match line.split_once('.') {
            Some((loc_type, rest)) => (non_empty(loc_type), rest),
            None => match line.split_once(char::is_whitespace) {
                Some((loc_type, rest)) => (non_empty(loc_type), rest),
                None => (non_empty(line), ""),
            },
        },
    };

    let (location, moment) = match LINE_REGEX.moment_split.captures(rest) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()).trim().to_string(),
            caps.get(2).and_then(|m| non_empty(m.as_str())),
        ),
        None => (rest.trim().to_string(), None),
    };

    HeadingParts {
        location_type,
        location,
        moment,
    }
}

/// 补全缺失字段：取上一场景的值，没有上一场景时用默认值
pub fn resolve_heading(parts: HeadingParts, previous: Option<&SceneHeading>, conf: &ImportConf) -> SceneHeading {
    let location_type = parts.location_type.unwrap_or_else(|| {
        previous.map_or_else(|| conf.default_location_type.clone(), |p| p.location_type.clone())
    });
    let moment = parts.moment.unwrap_or_else(|| {
        previous.map_or_else(|| conf.default_moment.clone(), |p| p.moment.clone())
    });

    SceneHeading {
        location_type,
        location: parts.location,
        moment,
    }
}

/// 场景显示标题：`[序号]: @ 地点`
pub fn scene_title(index: usize, location: &str) -> String {
    format!("[{}]: @ {}", index, truncate_location(location))
}

pub fn scene_color(index: usize) -> SceneColor {
    FountainConstants::palette_color(index)
}
