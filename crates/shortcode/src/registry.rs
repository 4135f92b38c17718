//! Shared handle to the current shortcode table.

use std::sync::Arc;

use arc_swap::ArcSwap;
use glyphgrid_primitives::{SymbolItem, Token};
use tracing::debug;

use crate::ShortcodeTable;

/// Process-wide shortcode table that readers load lock-free.
///
/// Reload builds a complete table off to the side and swaps the pointer, so a
/// concurrent reader sees either the old or the new table, never a mix.
pub struct ShortcodeRegistry {
	snap: ArcSwap<ShortcodeTable>,
}

impl ShortcodeRegistry {
	pub fn new(table: ShortcodeTable) -> Self {
		Self {
			snap: ArcSwap::from_pointee(table),
		}
	}

	/// Returns the current table. Holding the `Arc` pins it across reloads.
	pub fn snapshot(&self) -> Arc<ShortcodeTable> {
		self.snap.load_full()
	}

	pub fn resolve(&self, token: &str) -> Option<SymbolItem> {
		self.snap.load().resolve(token).cloned()
	}

	pub fn reverse_lookup(&self, item: &str) -> Option<Token> {
		self.snap.load().reverse_lookup(item).cloned()
	}

	pub fn search_by_prefix(&self, prefix: &str, limit: usize) -> Vec<(SymbolItem, Token)> {
		self.snap.load().search_by_prefix(prefix, limit)
	}

	/// Replaces the table wholesale.
	pub fn reload(&self, table: ShortcodeTable) {
		debug!(tokens = table.len(), "Swapping shortcode table");
		self.snap.store(Arc::new(table));
	}
}

impl Default for ShortcodeRegistry {
	fn default() -> Self {
		Self::new(ShortcodeTable::default())
	}
}
