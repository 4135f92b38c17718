//! Shortcode resolution.
//!
//! * [`ShortcodeTable`]: layered token ↔ item map with prefix search
//! * [`ShortcodeRegistry`]: atomically reloadable handle shared by readers
//! * [`extract`]: in-progress `:token` detection before the cursor

pub mod extract;
pub mod registry;
pub mod table;

pub use extract::{Extraction, MAX_TOKEN_CHARS, extract, extract_closed};
pub use registry::ShortcodeRegistry;
pub use table::{Layer, ShortcodeTable};
