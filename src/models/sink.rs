//! 文档模型接口
//!
//! 导入器只通过这个 trait 写入文档，不关心文档如何存储、渲染或同步。

use crate::models::{SceneColor, SceneElementType, SceneHeading};

/// 场景句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub usize);

/// 角色句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterId(pub usize);

pub trait DocumentSink {
    /// 新建场景，并按顺序追加到剧本元素序列
    fn create_scene(&mut self) -> SceneId;
    fn set_scene_heading(&mut self, scene: SceneId, heading: SceneHeading);
    fn set_scene_title(&mut self, scene: SceneId, title: &str);
    fn set_scene_color(&mut self, scene: SceneId, color: SceneColor);
    fn append_scene_element(&mut self, scene: SceneId, element_type: SceneElementType, text: &str);
    fn append_scene_note(&mut self, scene: SceneId, heading: &str, content: &str, color: SceneColor);

    /// 追加分隔元素（`#` 行）
    fn append_screenplay_break(&mut self, id: &str);

    /// 按名字精确查找角色，不存在则创建
    fn find_or_create_character(&mut self, name: &str) -> CharacterId;
    fn append_character_note(&mut self, character: CharacterId, heading: &str, content: &str);

    fn set_title(&mut self, text: &str);
    fn set_subtitle(&mut self, text: &str);
    fn set_author(&mut self, text: &str);
    fn set_version(&mut self, text: &str);
    fn set_contact(&mut self, text: &str);

    fn set_active_element(&mut self, index: usize);
}
