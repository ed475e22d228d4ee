use serde::{Deserialize, Serialize};

use crate::models::SceneColor;

/// 注解：挂在场景或角色上
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub heading: String,
    pub content: String,
    pub color: Option<SceneColor>,
}

impl Note {
    pub fn new(heading: &str, content: &str, color: Option<SceneColor>) -> Self {
        Note {
            heading: heading.to_string(),
            content: content.to_string(),
            color,
        }
    }
}

/// 角色，名字在角色表里唯一（区分大小写）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub notes: Vec<Note>,
}

impl Character {
    pub fn new(name: &str) -> Self {
        Character {
            name: name.to_string(),
            notes: Vec::new(),
        }
    }
}
