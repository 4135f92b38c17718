//! User-pinned items.

use std::sync::Arc;

use glyphgrid_primitives::{PAGE_SIZE, SymbolItem};
use tracing::{debug, warn};

use crate::kv::{KvStore, load_or_default, persist};

/// Favorites are capped at one page of keys.
pub const FAVORITES_CAPACITY: usize = PAGE_SIZE;

/// Store key of the favorites record.
pub const FAVORITES_KEY: &str = "favorites";

/// Why an item could not be favorited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteRejection {
	#[error("item is already a favorite")]
	Duplicate,
	#[error("favorites are full")]
	Full,
}

/// Ordered, duplicate-free, bounded list of items.
///
/// Overflow is rejected; nothing is ever evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteSet {
	items: Vec<SymbolItem>,
	capacity: usize,
}

impl FavoriteSet {
	pub fn new(capacity: usize) -> Self {
		Self {
			items: Vec::new(),
			capacity,
		}
	}

	/// Rebuilds a set from persisted items, dropping duplicates and overflow.
	pub fn from_items(items: impl IntoIterator<Item = SymbolItem>, capacity: usize) -> Self {
		let mut set = Self::new(capacity);
		for item in items {
			if let Err(rejection) = set.add(item.clone()) {
				warn!(%item, %rejection, "Dropping persisted favorite");
			}
		}
		set
	}

	pub fn add(&mut self, item: SymbolItem) -> Result<(), FavoriteRejection> {
		if self.contains(item.as_str()) {
			return Err(FavoriteRejection::Duplicate);
		}
		if self.is_full() {
			return Err(FavoriteRejection::Full);
		}
		self.items.push(item);
		Ok(())
	}

	/// Removes `item`, keeping the order of the rest. Returns whether it was present.
	pub fn remove(&mut self, item: &str) -> bool {
		let Some(idx) = self.items.iter().position(|i| i.as_str() == item) else {
			return false;
		};
		self.items.remove(idx);
		true
	}

	pub fn contains(&self, item: &str) -> bool {
		self.items.iter().any(|i| i.as_str() == item)
	}

	pub fn list(&self) -> &[SymbolItem] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn is_full(&self) -> bool {
		self.items.len() >= self.capacity
	}
}

/// [`FavoriteSet`] persisted after every mutation.
pub struct FavoritesStore {
	set: FavoriteSet,
	store: Arc<dyn KvStore>,
}

impl FavoritesStore {
	/// Loads the persisted favorites.
	pub fn open(store: Arc<dyn KvStore>) -> Self {
		let items: Vec<SymbolItem> = load_or_default(store.as_ref(), FAVORITES_KEY);
		let set = FavoriteSet::from_items(items, FAVORITES_CAPACITY);
		debug!(count = set.len(), "Loaded favorites");
		Self { set, store }
	}

	pub fn add(&mut self, item: SymbolItem) -> Result<(), FavoriteRejection> {
		self.set.add(item)?;
		self.save();
		Ok(())
	}

	/// Removes `item`; a no-op when it is not a favorite.
	pub fn remove(&mut self, item: &str) {
		if self.set.remove(item) {
			self.save();
		}
	}

	/// Adds `item` if absent, removes it otherwise. Returns whether it is now a favorite.
	pub fn toggle(&mut self, item: SymbolItem) -> Result<bool, FavoriteRejection> {
		if self.set.remove(item.as_str()) {
			self.save();
			return Ok(false);
		}
		self.add(item)?;
		Ok(true)
	}

	pub fn contains(&self, item: &str) -> bool {
		self.set.contains(item)
	}

	pub fn list(&self) -> &[SymbolItem] {
		self.set.list()
	}

	pub fn set(&self) -> &FavoriteSet {
		&self.set
	}

	fn save(&self) {
		persist(self.store.as_ref(), FAVORITES_KEY, self.set.list());
	}
}
