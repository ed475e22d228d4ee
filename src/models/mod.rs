pub mod scene;
pub mod character;
pub mod screenplay;
pub mod sink;
pub mod conf;

pub use scene::{Scene, SceneColor, SceneElement, SceneElementType, SceneHeading};
pub use character::{Character, Note};
pub use screenplay::{ScreenplayDocument, ScreenplayElement};
pub use sink::{CharacterId, DocumentSink, SceneId};
pub use conf::ImportConf;
