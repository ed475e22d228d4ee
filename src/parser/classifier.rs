//! 行分类
//!
//! `classify` 是纯函数：只看当前行和状态快照，返回分类结果；
//! 状态的变化由 `ParserState::after` 单独计算，由导入驱动负责应用。

use crate::models::ImportConf;
use crate::parser::heading::HeadingParts;
use crate::utils::{character_cue_name, strip_emphasis, strip_parentheses, FountainConstants, LINE_REGEX};

/// 分类时用到的解析状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserState {
    /// 是否已经出现过场景标题
    pub has_current_scene: bool,
    /// 是否处在角色对白块中
    pub in_character_cue: bool,
    /// 是否出现过空行。一旦为 true 整个导入过程中不再复位
    pub sticky_para_break: bool,
    /// 前言部分是否有正在记录注解的角色
    pub has_preamble_character: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleField {
    Title,
    Author,
    Version,
    Contact,
}

impl TitleField {
    fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "title" => Some(TitleField::Title),
            "author" => Some(TitleField::Author),
            "version" => Some(TitleField::Version),
            "contact" => Some(TitleField::Contact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    Blank,
    Break { id: String },
    SceneHeading(HeadingParts),
    TitlePageField { field: TitleField, value: String },
    CharacterPreambleStart { name: String },
    CharacterNoteHeading { heading: String },
    CharacterNoteContent { content: String },
    Transition { text: String },
    Shot { text: String },
    Parenthetical { text: String },
    Note { content: String },
    CharacterCue { name: String },
    Dialogue { text: String },
    Action { text: String },
    /// 第一个场景之前无法归属的行
    Ignored,
}

impl ClassifiedLine {
    // 把 `[...]` 前缀加回到最终文本前面
    fn with_prefix(self, prefix: Option<&str>) -> Self {
        let prefix = match prefix {
            Some(p) => p,
            None => return self,
        };
        let join = |text: String| {
            if text.is_empty() {
                prefix.to_string()
            } else {
                format!("{} {}", prefix, text)
            }
        };

        match self {
            ClassifiedLine::TitlePageField { field, value } => ClassifiedLine::TitlePageField { field, value: join(value) },
            ClassifiedLine::CharacterPreambleStart { name } => ClassifiedLine::CharacterPreambleStart { name: join(name) },
            ClassifiedLine::CharacterNoteHeading { heading } => ClassifiedLine::CharacterNoteHeading { heading: join(heading) },
            ClassifiedLine::CharacterNoteContent { content } => ClassifiedLine::CharacterNoteContent { content: join(content) },
            ClassifiedLine::Transition { text } => ClassifiedLine::Transition { text: join(text) },
            ClassifiedLine::Shot { text } => ClassifiedLine::Shot { text: join(text) },
            ClassifiedLine::Parenthetical { text } => ClassifiedLine::Parenthetical { text: join(text) },
            ClassifiedLine::Note { content } => ClassifiedLine::Note { content: join(content) },
            ClassifiedLine::CharacterCue { name } => ClassifiedLine::CharacterCue { name: join(name) },
            ClassifiedLine::Dialogue { text } => ClassifiedLine::Dialogue { text: join(text) },
            ClassifiedLine::Action { text } => ClassifiedLine::Action { text: join(text) },
            other => other,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ClassifiedLine::Blank => "blank",
            ClassifiedLine::Break { .. } => "break",
            ClassifiedLine::SceneHeading(_) => "scene_heading",
            ClassifiedLine::TitlePageField { .. } => "title_page",
            ClassifiedLine::CharacterPreambleStart { .. } => "character_preamble",
            ClassifiedLine::CharacterNoteHeading { .. } => "character_note_heading",
            ClassifiedLine::CharacterNoteContent { .. } => "character_note_content",
            ClassifiedLine::Transition { .. } => "transition",
            ClassifiedLine::Shot { .. } => "shot",
            ClassifiedLine::Parenthetical { .. } => "parenthetical",
            ClassifiedLine::Note { .. } => "note",
            ClassifiedLine::CharacterCue { .. } => "character",
            ClassifiedLine::Dialogue { .. } => "dialogue",
            ClassifiedLine::Action { .. } => "action",
            ClassifiedLine::Ignored => "ignored",
        }
    }
}

impl ParserState {
    /// 处理完一行后的新状态
    pub fn after(&self, line: &ClassifiedLine) -> ParserState {
        let mut next = *self;
        match line {
            ClassifiedLine::Blank => {
                next.in_character_cue = false;
                next.sticky_para_break = true;
                next.has_preamble_character = false;
            }
            ClassifiedLine::SceneHeading(_) => {
                next.has_current_scene = true;
                next.has_preamble_character = false;
            }
            ClassifiedLine::CharacterPreambleStart { name } => {
                next.has_preamble_character = !name.is_empty();
            }
            ClassifiedLine::CharacterCue { .. } => {
                next.in_character_cue = true;
            }
            ClassifiedLine::Dialogue { .. } => {
                // 还没出现过空行时，对白只有一行
                if !self.sticky_para_break {
                    next.in_character_cue = false;
                }
            }
            _ => {}
        }
        next
    }
}

// 第一个 `]` 之前（含）为前缀，没有 `]` 时不做处理
fn split_bracket_prefix(line: &str) -> (Option<&str>, &str) {
    if line.starts_with('[') {
        if let Some(end) = line.find(']') {
            return (Some(&line[..=end]), line[end + 1..].trim());
        }
    }
    (None, line)
}

fn break_id(line: &str) -> String {
    let stripped: String = line.chars().filter(|c| *c != '#').collect();
    stripped.split_whitespace().next().unwrap_or("").to_string()
}

// 默认只看是否以 "INT" 开头，不要求后面跟分隔符：
// "INTO the night" 也会开始新场景，已有剧本依赖这一行为，不要收紧
fn is_heading(line: &str, conf: &ImportConf) -> bool {
    if line.starts_with('.') {
        return true;
    }
    if conf.honor_all_heading_hints {
        FountainConstants::HEADING_HINTS.iter().any(|hint| line.starts_with(hint))
    } else {
        line.starts_with(FountainConstants::HEADING_HINTS[0])
    }
}

/// 对一行（已去除首尾空白）进行分类
pub fn classify(line: &str, state: &ParserState, conf: &ImportConf) -> ClassifiedLine {
    if line.is_empty() {
        return ClassifiedLine::Blank;
    }

    if line.starts_with('#') {
        return ClassifiedLine::Break { id: break_id(line) };
    }

    let (prefix, rest) = split_bracket_prefix(line);
    // 只剩样式标记的行得到空文本，照常往下分类
    let text = strip_emphasis(rest);

    if !state.in_character_cue && is_heading(&text, conf) {
        return ClassifiedLine::SceneHeading(HeadingParts::parse(&text));
    }

    let classified = if state.has_current_scene {
        classify_scene_line(&text, state)
    } else {
        classify_preamble_line(&text, state)
    };
    classified.with_prefix(prefix)
}

fn classify_preamble_line(text: &str, state: &ParserState) -> ClassifiedLine {
    if let Some(caps) = LINE_REGEX.title_page.captures(text) {
        if let Some(field) = TitleField::from_key(&caps[1]) {
            return ClassifiedLine::TitlePageField {
                field,
                value: caps[2].trim().to_string(),
            };
        }
    }

    if let Some(name) = text.strip_prefix('@') {
        return ClassifiedLine::CharacterPreambleStart {
            name: name.trim().to_string(),
        };
    }

    if !state.has_preamble_character {
        return ClassifiedLine::Ignored;
    }

    match strip_parentheses(text) {
        Some(inner) => ClassifiedLine::CharacterNoteHeading {
            heading: inner.trim().to_string(),
        },
        None => ClassifiedLine::CharacterNoteContent {
            content: text.to_string(),
        },
    }
}

fn classify_scene_line(text: &str, state: &ParserState) -> ClassifiedLine {
    if LINE_REGEX.transition.is_match(text) {
        return ClassifiedLine::Transition { text: text.to_string() };
    }

    if let Some(shot) = text.strip_prefix('>') {
        let shot = shot.strip_suffix('<').unwrap_or(shot);
        return ClassifiedLine::Shot {
            text: shot.trim().to_string(),
        };
    }

    if let Some(inner) = strip_parentheses(text) {
        if state.in_character_cue {
            return ClassifiedLine::Parenthetical { text: text.to_string() };
        }
        // 不在对白块中的括号行作为场景注解
        return ClassifiedLine::Note {
            content: inner.trim().to_string(),
        };
    }

    if !state.in_character_cue {
        if let Some(name) = character_cue_name(text) {
            return ClassifiedLine::CharacterCue { name };
        }
    }

    if state.in_character_cue {
        ClassifiedLine::Dialogue { text: text.to_string() }
    } else {
        ClassifiedLine::Action { text: text.to_string() }
    }
}
