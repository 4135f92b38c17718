//! Shortcode completion and a keyboard-grid picker for symbols and emoji.
//!
//! [`Engine`] is the entry point. It owns the shortcode and catalog snapshots,
//! the user's favorites, usage ledger and custom entries, and drives picker
//! sessions against a host [`TextTarget`].

pub mod config;
pub mod engine;
pub mod text;

pub use config::{ConfigError, EngineConfig};
pub use engine::{CUSTOM_ENTRIES_KEY, Engine, EngineError, Suggestions};
pub use glyphgrid_picker::{PickerOutcome, PickerState, SessionEnd};
pub use glyphgrid_primitives::{Key, KeyLayout, Modifier, SpecialKey, SymbolItem, Tab, Token};
pub use text::{StringTarget, TextTarget};
