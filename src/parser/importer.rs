use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::error::ImportResult;
use crate::models::{CharacterId, DocumentSink, ImportConf, SceneElementType, SceneHeading, SceneId};
use crate::parser::classifier::{classify, ClassifiedLine, ParserState};
use crate::parser::heading::{resolve_heading, scene_color, scene_title, HeadingParts};
use crate::parser::normalizer::{decode_input, normalize_lines};
use crate::parser::preamble::PreambleBuilder;
use crate::utils::FountainConstants;

/// 导入统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub lines: usize,
    pub scenes: usize,
    pub breaks: usize,
    pub elements: usize,
    pub scene_notes: usize,
    pub characters: usize,
    pub ignored_lines: usize,
}

/// Fountain 导入器
///
/// 逐行分类并把结果写入 `DocumentSink`。状态只在一次导入内有效，
/// 每次 `import_*` 调用开始时重置。
pub struct FountainImporter {
    conf: ImportConf,
    state: ParserState,
    scene_counter: usize,
    current_scene: Option<SceneId>,
    current_heading: Option<SceneHeading>,
    scene_note_count: usize,
    preamble: PreambleBuilder,
    seen_characters: HashSet<CharacterId>,
    summary: ImportSummary,
}

impl Default for FountainImporter {
    fn default() -> Self {
        Self::new(ImportConf::default())
    }
}

impl FountainImporter {
    pub fn new(conf: ImportConf) -> Self {
        FountainImporter {
            conf,
            state: ParserState::default(),
            scene_counter: 0,
            current_scene: None,
            current_heading: None,
            scene_note_count: 0,
            preamble: PreambleBuilder::new(),
            seen_characters: HashSet::new(),
            summary: ImportSummary::default(),
        }
    }

    fn reset(&mut self) {
        self.state = ParserState::default();
        self.scene_counter = 0;
        self.current_scene = None;
        self.current_heading = None;
        self.scene_note_count = 0;
        self.preamble = PreambleBuilder::new();
        self.seen_characters.clear();
        self.summary = ImportSummary::default();
    }

    /// 从文件导入
    pub fn import_file<P: AsRef<Path>, S: DocumentSink>(&mut self, path: P, sink: &mut S) -> ImportResult<ImportSummary> {
        let bytes = fs::read(path)?;
        Ok(self.import_bytes(&bytes, sink))
    }

    /// 读取全部输入后导入，只有读取失败才会返回错误
    pub fn import_reader<R: Read, S: DocumentSink>(&mut self, mut reader: R, sink: &mut S) -> ImportResult<ImportSummary> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(self.import_bytes(&bytes, sink))
    }

    pub fn import_bytes<S: DocumentSink>(&mut self, bytes: &[u8], sink: &mut S) -> ImportSummary {
        let text = decode_input(bytes);
        self.import_text(&text, sink)
    }

    pub fn import_text<S: DocumentSink>(&mut self, text: &str, sink: &mut S) -> ImportSummary {
        self.reset();

        let lines = normalize_lines(text);
        self.summary.lines = lines.len();

        for (i, line) in lines.iter().enumerate() {
            let classified = classify(line, &self.state, &self.conf);
            trace!("第{}行 [{}]: {}", i + 1, classified.kind(), line);
            self.apply(&classified, sink);
            self.state = self.state.after(&classified);
        }

        self.preamble.finish(sink);
        sink.set_active_element(0);

        info!(
            "导入完成: {} 行, {} 个场景, {} 个分隔, {} 个角色",
            self.summary.lines, self.summary.scenes, self.summary.breaks, self.summary.characters
        );
        std::mem::take(&mut self.summary)
    }

    fn apply<S: DocumentSink>(&mut self, line: &ClassifiedLine, sink: &mut S) {
        match line {
            ClassifiedLine::Blank => {
                self.preamble.end_character();
            }
            ClassifiedLine::Break { id } => {
                sink.append_screenplay_break(id);
                self.summary.breaks += 1;
            }
            ClassifiedLine::SceneHeading(parts) => {
                self.preamble.finish(sink);
                self.start_scene(parts.clone(), sink);
            }
            ClassifiedLine::TitlePageField { field, value } => {
                self.preamble.set_title_field(sink, *field, value);
            }
            ClassifiedLine::CharacterPreambleStart { name } => {
                if let Some(character) = self.preamble.start_character(sink, name) {
                    if self.seen_characters.insert(character) {
                        self.summary.characters += 1;
                    }
                }
            }
            ClassifiedLine::CharacterNoteHeading { heading } => {
                self.preamble.open_note(heading);
            }
            ClassifiedLine::CharacterNoteContent { content } => {
                self.preamble.append_content(content);
            }
            ClassifiedLine::Note { content } => {
                self.add_scene_note(content, sink);
            }
            ClassifiedLine::Transition { text } => self.add_element(SceneElementType::Transition, text, sink),
            ClassifiedLine::Shot { text } => self.add_element(SceneElementType::Shot, text, sink),
            ClassifiedLine::Parenthetical { text } => self.add_element(SceneElementType::Parenthetical, text, sink),
            ClassifiedLine::CharacterCue { name } => self.add_element(SceneElementType::Character, name, sink),
            ClassifiedLine::Dialogue { text } => self.add_element(SceneElementType::Dialogue, text, sink),
            ClassifiedLine::Action { text } => self.add_element(SceneElementType::Action, text, sink),
            ClassifiedLine::Ignored => {
                self.summary.ignored_lines += 1;
            }
        }
    }

    fn start_scene<S: DocumentSink>(&mut self, parts: HeadingParts, sink: &mut S) {
        self.scene_counter += 1;
        let index = self.scene_counter;

        let heading = resolve_heading(parts, self.current_heading.as_ref(), &self.conf);
        let scene = sink.create_scene();
        sink.set_scene_title(scene, &scene_title(index, &heading.location));
        sink.set_scene_color(scene, scene_color(index));
        sink.set_scene_heading(scene, heading.clone());
        debug!(
            "场景 {}: {} / {} / {}",
            index, heading.location_type, heading.location, heading.moment
        );

        self.current_scene = Some(scene);
        self.current_heading = Some(heading);
        self.scene_note_count = 0;
        self.summary.scenes += 1;
    }

    fn add_element<S: DocumentSink>(&mut self, element_type: SceneElementType, text: &str, sink: &mut S) {
        if let Some(scene) = self.current_scene {
            sink.append_scene_element(scene, element_type, text);
            self.summary.elements += 1;
        }
    }

    fn add_scene_note<S: DocumentSink>(&mut self, content: &str, sink: &mut S) {
        if let Some(scene) = self.current_scene {
            let heading = format!("Note #{}", self.scene_note_count + 1);
            let color = FountainConstants::palette_color(self.scene_note_count);
            sink.append_scene_note(scene, &heading, content, color);
            self.scene_note_count += 1;
            self.summary.scene_notes += 1;
        }
    }
}
