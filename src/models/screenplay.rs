use serde::{Deserialize, Serialize};

use crate::models::sink::{CharacterId, DocumentSink, SceneId};
use crate::models::{
    Character,
    Note,
    Scene,
    SceneColor,
    SceneElement,
    SceneElementType,
    SceneHeading
};

/// 剧本顶层序列中的一个位置：场景或分隔
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenplayElement {
    Scene { scene_index: usize },
    Break { id: String },
}

/// 内存中的剧本文档，实现 `DocumentSink`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenplayDocument {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub version: String,
    pub contact: String,
    pub scenes: Vec<Scene>,
    pub elements: Vec<ScreenplayElement>,
    pub characters: Vec<Character>,
    pub active_element: Option<usize>,
}

impl ScreenplayDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// 所有分隔元素的 id，按出现顺序
    pub fn break_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                ScreenplayElement::Break { id } => Some(id.as_str()),
                ScreenplayElement::Scene { .. } => None,
            })
            .collect()
    }

    fn scene_mut(&mut self, scene: SceneId) -> Option<&mut Scene> {
        self.scenes.get_mut(scene.0)
    }
}

impl DocumentSink for ScreenplayDocument {
    fn create_scene(&mut self) -> SceneId {
        let id = SceneId(self.scenes.len());
        let index = self.scenes.len() + 1;
        self.scenes.push(Scene::new(index));
        self.elements.push(ScreenplayElement::Scene { scene_index: index });
        id
    }

    fn set_scene_heading(&mut self, scene: SceneId, heading: SceneHeading) {
        if let Some(s) = self.scene_mut(scene) {
            s.heading = heading;
        }
    }

    fn set_scene_title(&mut self, scene: SceneId, title: &str) {
        if let Some(s) = self.scene_mut(scene) {
            s.title = title.to_string();
        }
    }

    fn set_scene_color(&mut self, scene: SceneId, color: SceneColor) {
        if let Some(s) = self.scene_mut(scene) {
            s.color = Some(color);
        }
    }

    fn append_scene_element(&mut self, scene: SceneId, element_type: SceneElementType, text: &str) {
        if let Some(s) = self.scene_mut(scene) {
            s.elements.push(SceneElement {
                element_type,
                text: text.to_string(),
            });
        }
    }

    fn append_scene_note(&mut self, scene: SceneId, heading: &str, content: &str, color: SceneColor) {
        if let Some(s) = self.scene_mut(scene) {
            s.notes.push(Note::new(heading, content, Some(color)));
        }
    }

    fn append_screenplay_break(&mut self, id: &str) {
        self.elements.push(ScreenplayElement::Break { id: id.to_string() });
    }

    fn find_or_create_character(&mut self, name: &str) -> CharacterId {
        if let Some(pos) = self.characters.iter().position(|c| c.name == name) {
            return CharacterId(pos);
        }
        self.characters.push(Character::new(name));
        CharacterId(self.characters.len() - 1)
    }

    fn append_character_note(&mut self, character: CharacterId, heading: &str, content: &str) {
        if let Some(c) = self.characters.get_mut(character.0) {
            c.notes.push(Note::new(heading, content, None));
        }
    }

    fn set_title(&mut self, text: &str) {
        self.title = text.to_string();
    }

    fn set_subtitle(&mut self, text: &str) {
        self.subtitle = text.to_string();
    }

    fn set_author(&mut self, text: &str) {
        self.author = text.to_string();
    }

    fn set_version(&mut self, text: &str) {
        self.version = text.to_string();
    }

    fn set_contact(&mut self, text: &str) {
        self.contact = text.to_string();
    }

    fn set_active_element(&mut self, index: usize) {
        self.active_element = Some(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenes_are_indexed_from_one() {
        let mut doc = ScreenplayDocument::new();
        let first = doc.create_scene();
        doc.append_screenplay_break("ACT1");
        let second = doc.create_scene();

        assert_eq!(first, SceneId(0));
        assert_eq!(second, SceneId(1));
        assert_eq!(doc.scenes[0].index, 1);
        assert_eq!(doc.scenes[1].index, 2);
        assert_eq!(
            doc.elements,
            vec![
                ScreenplayElement::Scene { scene_index: 1 },
                ScreenplayElement::Break { id: "ACT1".to_string() },
                ScreenplayElement::Scene { scene_index: 2 },
            ]
        );
    }

    #[test]
    fn characters_are_unique_by_exact_name() {
        let mut doc = ScreenplayDocument::new();
        let jane = doc.find_or_create_character("JANE");
        let again = doc.find_or_create_character("JANE");
        let lower = doc.find_or_create_character("Jane");

        assert_eq!(jane, again);
        assert_ne!(jane, lower);
        assert_eq!(doc.characters.len(), 2);
    }
}
