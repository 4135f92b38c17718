//! Static catalog definitions supplied as configuration data.
//!
//! * [`CatalogSource`]: validated base emoji and symbol override definitions
//! * [`CatalogSource::fallback`]: minimal hardcoded set used when a source is malformed

mod fallback;
pub mod source;

pub use source::{CatalogSource, DEFAULT_CATALOG, EmojiDef, SourceError, SourceProblem, SourceProblemKind, SymbolDef, parse_codepoints};
