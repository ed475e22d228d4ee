pub mod normalizer;
pub mod classifier;
pub mod heading;
pub mod preamble;
pub mod importer;

pub use classifier::{classify, ClassifiedLine, ParserState, TitleField};
pub use heading::{resolve_heading, scene_color, scene_title, HeadingParts};
pub use importer::{FountainImporter, ImportSummary};
pub use normalizer::{decode_input, normalize_lines};
pub use preamble::PreambleBuilder;
