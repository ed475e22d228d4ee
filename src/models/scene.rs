use serde::{Deserialize, Serialize};

use crate::models::Note;

/// 场景颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneColor {
    Purple,
    Blue,
    Orange,
    Red,
    Brown,
    Gray,
}

impl SceneColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneColor::Purple => "purple",
            SceneColor::Blue => "blue",
            SceneColor::Orange => "orange",
            SceneColor::Red => "red",
            SceneColor::Brown => "brown",
            SceneColor::Gray => "gray",
        }
    }
}

/// 场景标题：内外景类型、地点、时间
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneHeading {
    pub location_type: String,
    pub location: String,
    pub moment: String,
}

impl SceneHeading {
    pub fn new(location_type: &str, location: &str, moment: &str) -> Self {
        SceneHeading {
            location_type: location_type.to_string(),
            location: location.to_string(),
            moment: moment.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneElementType {
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Shot,
    Transition,
}

impl SceneElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneElementType::Action => "action",
            SceneElementType::Character => "character",
            SceneElementType::Dialogue => "dialogue",
            SceneElementType::Parenthetical => "parenthetical",
            SceneElementType::Shot => "shot",
            SceneElementType::Transition => "transition",
        }
    }
}

/// 场景内的一行（段落）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneElement {
    pub element_type: SceneElementType,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 从 1 开始的创建序号
    pub index: usize,
    pub heading: SceneHeading,
    pub title: String,
    pub color: Option<SceneColor>,
    pub elements: Vec<SceneElement>,
    pub notes: Vec<Note>,
}

impl Scene {
    pub fn new(index: usize) -> Self {
        Scene {
            index,
            heading: SceneHeading::new("", "", ""),
            title: String::new(),
            color: None,
            elements: Vec::new(),
            notes: Vec::new(),
        }
    }
}
