//! User-defined items appended to catalog categories.

use glyphgrid_primitives::{ItemError, SymbolItem, Token, TokenError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Why a custom entry was not added.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomRejection {
	#[error("invalid shortcode: {0}")]
	InvalidToken(#[from] TokenError),
	#[error("invalid item: {0}")]
	InvalidItem(#[from] ItemError),
	#[error("{item} is already in {category}")]
	DuplicateItem { item: SymbolItem, category: String },
	#[error(":{token}: is already used in {category}")]
	DuplicateToken { token: Token, category: String },
}

/// One user-added item with its shortcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEntry {
	pub item: SymbolItem,
	pub token: Token,
}

/// Custom entries keyed by category name, insertion ordered.
///
/// This is the persisted record; catalog and shortcode snapshots are rebuilt from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomEntries {
	by_category: IndexMap<String, Vec<CustomEntry>>,
}

impl CustomEntries {
	/// Appends `item` to `category` under `token`.
	///
	/// Rejected when the token is invalid, or the item or case-folded token is
	/// already used by a custom entry of the same category.
	pub fn add(&mut self, item: &str, token: &str, category: &str) -> Result<(), CustomRejection> {
		let token = Token::parse(token)?;
		let item = SymbolItem::new(item)?;

		let entries = self.by_category.get(category).map(Vec::as_slice).unwrap_or_default();
		if entries.iter().any(|e| e.item == item) {
			return Err(CustomRejection::DuplicateItem {
				item,
				category: category.to_string(),
			});
		}
		if entries.iter().any(|e| e.token == token) {
			return Err(CustomRejection::DuplicateToken {
				token,
				category: category.to_string(),
			});
		}

		self.by_category.entry(category.to_string()).or_default().push(CustomEntry { item, token });
		Ok(())
	}

	/// Removes `item` from `category`. Returns whether anything was removed.
	pub fn remove(&mut self, item: &str, category: &str) -> bool {
		let Some(entries) = self.by_category.get_mut(category) else {
			return false;
		};
		let before = entries.len();
		entries.retain(|e| e.item.as_str() != item);
		let removed = entries.len() != before;
		if entries.is_empty() {
			self.by_category.shift_remove(category);
		}
		removed
	}

	/// Entries of one category in insertion order.
	pub fn entries_in(&self, category: &str) -> &[CustomEntry] {
		self.by_category.get(category).map(Vec::as_slice).unwrap_or_default()
	}

	/// Category names that have at least one entry, in first-use order.
	pub fn categories(&self) -> impl Iterator<Item = &str> {
		self.by_category.keys().map(String::as_str)
	}

	/// `(token, item)` pairs in category then insertion order, for the custom shortcode layer.
	pub fn shortcodes(&self) -> impl Iterator<Item = (&Token, &SymbolItem)> {
		self.by_category.values().flatten().map(|e| (&e.token, &e.item))
	}

	pub fn len(&self) -> usize {
		self.by_category.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.by_category.is_empty()
	}
}
