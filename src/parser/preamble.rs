//! 第一个场景之前的前言：标题页字段与角色注解

use tracing::debug;

use crate::models::{CharacterId, DocumentSink};
use crate::parser::classifier::TitleField;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingNote {
    heading: String,
    content: String,
}

/// 记录当前角色以及各角色尚未写入文档的注解
///
/// 注解按角色首次出现的顺序保存，直到第一个场景标题或输入结束才写入文档，
/// 所以同一角色再次出现时仍能接着写它最近的一条注解。
#[derive(Debug, Default)]
pub struct PreambleBuilder {
    current: Option<CharacterId>,
    pending: Vec<(CharacterId, Vec<PendingNote>)>,
}

impl PreambleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 标题页字段。`Title: 标题 (副标题)` 中括号部分作为副标题
    pub fn set_title_field<S: DocumentSink>(&mut self, sink: &mut S, field: TitleField, value: &str) {
        match field {
            TitleField::Title => {
                let (title, subtitle) = split_subtitle(value);
                sink.set_title(title);
                if let Some(subtitle) = subtitle {
                    sink.set_subtitle(subtitle);
                }
            }
            TitleField::Author => sink.set_author(value),
            TitleField::Version => sink.set_version(value),
            TitleField::Contact => sink.set_contact(value),
        }
    }

    /// `@名字`：查找或创建角色并设为当前角色
    pub fn start_character<S: DocumentSink>(&mut self, sink: &mut S, name: &str) -> Option<CharacterId> {
        self.current = None;
        if name.is_empty() {
            return None;
        }
        debug!("前言角色: {}", name);
        let character = sink.find_or_create_character(name);
        if !self.pending.iter().any(|(c, _)| *c == character) {
            self.pending.push((character, Vec::new()));
        }
        self.current = Some(character);
        self.current
    }

    /// 空行结束当前角色，已有的注解继续保留
    pub fn end_character(&mut self) {
        self.current = None;
    }

    /// `(标题)`：为当前角色新开一条注解
    pub fn open_note(&mut self, heading: &str) {
        if let Some(notes) = self.current_notes() {
            notes.push(PendingNote {
                heading: heading.to_string(),
                content: String::new(),
            });
        }
    }

    /// 普通文本追加到当前角色最近的一条注解，没有注解时先建一条 "Note"
    pub fn append_content(&mut self, text: &str) {
        let Some(notes) = self.current_notes() else {
            return;
        };
        if notes.is_empty() {
            notes.push(PendingNote {
                heading: "Note".to_string(),
                content: String::new(),
            });
        }
        if let Some(note) = notes.last_mut() {
            if !note.content.is_empty() {
                note.content.push('\n');
            }
            note.content.push_str(text);
        }
    }

    /// 把所有角色的注解写入文档
    pub fn finish<S: DocumentSink>(&mut self, sink: &mut S) {
        self.current = None;
        for (character, notes) in self.pending.drain(..) {
            for note in notes {
                sink.append_character_note(character, &note.heading, &note.content);
            }
        }
    }

    fn current_notes(&mut self) -> Option<&mut Vec<PendingNote>> {
        let current = self.current?;
        self.pending
            .iter_mut()
            .find(|(c, _)| *c == current)
            .map(|(_, notes)| notes)
    }
}

fn split_subtitle(value: &str) -> (&str, Option<&str>) {
    match (value.find('('), value.rfind(')')) {
        (Some(open), Some(close)) if open < close => (value[..open].trim(), Some(value[open + 1..close].trim())),
        _ => (value, None),
    }
}
