pub mod error;
pub mod models;
pub mod utils;
pub mod parser;
pub mod api;

pub use error::{ImportError, ImportResult};

pub use models::{
    Character,
    CharacterId,
    DocumentSink,
    ImportConf,
    Note,
    Scene,
    SceneColor,
    SceneElement,
    SceneElementType,
    SceneHeading,
    SceneId,
    ScreenplayDocument,
    ScreenplayElement
};

pub use parser::{
    FountainImporter,
    ImportSummary,
    ClassifiedLine,
    ParserState
};

pub use api::{
    import_fountain_text,
    import_fountain_file,
    import_fountain_json
};

/// 导入Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
/// * `config` - 导入配置
///
/// # Returns
///
/// 导入后的剧本文档
pub fn import(script: &str, config: &ImportConf) -> ScreenplayDocument {
    let mut importer = FountainImporter::new(config.clone());
    let mut document = ScreenplayDocument::new();
    importer.import_text(script, &mut document);
    document
}
