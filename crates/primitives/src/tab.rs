//! Picker tabs and the catalog domains behind them.

use serde::{Deserialize, Serialize};

/// Catalog half a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
	Symbols,
	Emojis,
}

/// Picker tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
	/// User-pinned items. Has no categories.
	#[default]
	Favorites,
	Symbols,
	Emojis,
}

impl Tab {
	/// All tabs in display order.
	pub const ALL: [Tab; 3] = [Tab::Favorites, Tab::Symbols, Tab::Emojis];

	/// Catalog domain shown by this tab, `None` for favorites.
	pub fn domain(self) -> Option<Domain> {
		match self {
			Tab::Favorites => None,
			Tab::Symbols => Some(Domain::Symbols),
			Tab::Emojis => Some(Domain::Emojis),
		}
	}

	/// Returns whether the tab exposes a category selector.
	pub fn has_categories(self) -> bool {
		match self {
			Tab::Favorites => false,
			Tab::Symbols | Tab::Emojis => true,
		}
	}

	/// Cyclic neighbour in [`Tab::ALL`].
	pub fn cycle(self, delta: isize) -> Tab {
		let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
		Tab::ALL[wrap_index(idx, delta, Tab::ALL.len())]
	}
}

impl From<Domain> for Tab {
	fn from(domain: Domain) -> Self {
		match domain {
			Domain::Symbols => Tab::Symbols,
			Domain::Emojis => Tab::Emojis,
		}
	}
}

/// Shifts `idx` by `delta` within `0..len`, wrapping at both ends.
///
/// Returns 0 when `len` is 0.
pub fn wrap_index(idx: usize, delta: isize, len: usize) -> usize {
	if len == 0 {
		return 0;
	}
	let len = len as isize;
	(idx as isize + delta).rem_euclid(len) as usize
}
