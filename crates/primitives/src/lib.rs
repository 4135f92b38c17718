//! Core value types shared by the shortcode and picker engines.

/// Physical key grid and layout legends.
pub mod grid;
/// Symbol items and complexity detection.
pub mod item;
/// Key and modifier event types.
pub mod key;
/// Picker tabs and catalog domains.
pub mod tab;
/// Shortcode tokens.
pub mod token;

pub use grid::{GRID_ROWS, KeyLayout, KeyPosition, PAGE_SIZE};
pub use item::{ItemError, SymbolItem};
pub use key::{Key, KeyCode, Modifier, Modifiers, SpecialKey};
pub use tab::{Domain, Tab, wrap_index};
pub use token::{Token, TokenError, is_token_char};
