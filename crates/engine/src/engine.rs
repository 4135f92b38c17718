//! The engine facade tying shortcodes, catalog, user state and the picker together.

use std::sync::Arc;

use glyphgrid_catalog::{CatalogRegistry, CategoryCatalog, CustomEntries, CustomRejection};
use glyphgrid_data::{CatalogSource, SourceError};
use glyphgrid_picker::{PickerContext, PickerOutcome, PickerState, QUICK_RECALL_SLOTS, SessionEnd};
use glyphgrid_primitives::{Key, SymbolItem, Tab, Token};
use glyphgrid_shortcode::{ShortcodeRegistry, ShortcodeTable, extract, extract_closed};
use glyphgrid_store::{
	Clock, FavoriteRejection, FavoritesStore, FileStore, KvStore, MemoryStore, StoreError, SystemClock, UsageLedger, load_json, save_json,
};
use tracing::{debug, warn};

use crate::config::{ConfigError, EngineConfig};
use crate::text::TextTarget;

/// Store key of the persisted [`CustomEntries`].
pub const CUSTOM_ENTRIES_KEY: &str = "custom_entries";

/// Failure to bring an engine up.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error(transparent)]
	Store(#[from] StoreError),
}

/// Completion candidates for the shortcode being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
	/// Token as typed, without the colon.
	pub token: String,
	/// Byte offset of the opening colon in the text before the cursor.
	pub start: usize,
	/// Chars to delete before inserting a candidate.
	pub delete_chars: usize,
	/// Shortest tokens first.
	pub candidates: Vec<(SymbolItem, Token)>,
}

pub struct Engine {
	config: EngineConfig,
	source: CatalogSource,
	custom: CustomEntries,
	shortcodes: ShortcodeRegistry,
	catalog: CatalogRegistry,
	favorites: FavoritesStore,
	ledger: UsageLedger,
	store: Arc<dyn KvStore>,
}

impl Engine {
	/// Builds an engine from `config`, opening the configured state file and catalog.
	///
	/// An unreadable or malformed catalog degrades to the fallback set; an
	/// unreadable state file is an error.
	pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
		let store: Arc<dyn KvStore> = match &config.store_path {
			Some(path) => Arc::new(FileStore::open(path.clone())?),
			None => Arc::new(MemoryStore::new()),
		};
		let source = match &config.catalog_path {
			Some(path) => CatalogSource::from_path(path).unwrap_or_else(|error| {
				warn!(path = %path.display(), %error, "Catalog file rejected, using fallback symbol set");
				CatalogSource::fallback()
			}),
			None => CatalogSource::builtin(),
		};
		Ok(Self::with_parts(config, source, store, Arc::new(SystemClock)))
	}

	/// Loads the configuration file at `path` and builds an engine from it.
	pub fn from_config_file(path: &std::path::Path) -> Result<Self, EngineError> {
		Self::new(EngineConfig::load(path)?)
	}

	/// Assembles an engine from explicit parts.
	pub fn with_parts(config: EngineConfig, source: CatalogSource, store: Arc<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
		let custom = match load_json::<CustomEntries>(store.as_ref(), CUSTOM_ENTRIES_KEY) {
			Ok(custom) => custom.unwrap_or_default(),
			Err(error) => {
				warn!(%error, "Discarding unreadable custom entries");
				CustomEntries::default()
			}
		};
		let favorites = FavoritesStore::open(Arc::clone(&store));
		let ledger = UsageLedger::open(Arc::clone(&store), clock, config.ledger_capacity);

		let engine = Self {
			shortcodes: ShortcodeRegistry::new(ShortcodeTable::build(&source, custom.shortcodes())),
			catalog: CatalogRegistry::new(CategoryCatalog::build(&source, &custom)),
			config,
			source,
			custom,
			favorites,
			ledger,
			store,
		};
		debug!(
			tokens = engine.shortcodes.snapshot().len(),
			categories = engine.catalog.snapshot().categories().len(),
			custom = engine.custom.len(),
			"Engine ready"
		);
		engine
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn shortcodes(&self) -> Arc<ShortcodeTable> {
		self.shortcodes.snapshot()
	}

	pub fn catalog(&self) -> Arc<CategoryCatalog> {
		self.catalog.snapshot()
	}

	pub fn resolve(&self, token: &str) -> Option<SymbolItem> {
		self.shortcodes.resolve(token)
	}

	pub fn reverse_lookup(&self, item: &str) -> Option<Token> {
		self.shortcodes.reverse_lookup(item)
	}

	/// Candidates for the `:token` ending `text_before_cursor`, `None` when
	/// nothing is being typed or nothing matches.
	pub fn suggestions(&self, text_before_cursor: &str) -> Option<Suggestions> {
		let extraction = extract(text_before_cursor)?;
		let candidates = self.shortcodes.search_by_prefix(extraction.token, self.config.suggestion_limit);
		if candidates.is_empty() {
			return None;
		}
		Some(Suggestions {
			token: extraction.token.to_string(),
			start: extraction.start,
			delete_chars: extraction.delete_chars(),
			candidates,
		})
	}

	/// Replaces the `:token` before the cursor with `item` and records the use.
	///
	/// Returns false, leaving the text alone, when no token is being typed.
	pub fn accept_suggestion(&mut self, target: &mut dyn TextTarget, item: &SymbolItem) -> bool {
		let text = target.text_before_cursor();
		let Some(extraction) = extract(&text) else {
			return false;
		};
		target.replace_before_cursor(extraction.delete_chars(), item.as_str());
		self.ledger.record(item);
		true
	}

	/// Replaces a closed `:token:` before the cursor with its item.
	///
	/// Disabled by `auto_replace_closed = false`. Unknown tokens are left as typed.
	pub fn auto_replace(&mut self, target: &mut dyn TextTarget) -> Option<SymbolItem> {
		if !self.config.auto_replace_closed {
			return None;
		}
		let text = target.text_before_cursor();
		let extraction = extract_closed(&text)?;
		let item = self.shortcodes.resolve(extraction.token)?;
		target.replace_before_cursor(extraction.delete_chars(), item.as_str());
		self.ledger.record(&item);
		Some(item)
	}

	pub fn custom_entries(&self) -> &CustomEntries {
		&self.custom
	}

	/// Adds a custom item to `category` and rebuilds the snapshots.
	pub fn add_custom(&mut self, item: &str, token: &str, category: &str) -> Result<(), CustomRejection> {
		self.custom.add(item, token, category)?;
		self.save_custom();
		self.rebuild();
		Ok(())
	}

	/// Removes a custom item. Returns whether it existed.
	pub fn remove_custom(&mut self, item: &str, category: &str) -> bool {
		if !self.custom.remove(item, category) {
			return false;
		}
		self.save_custom();
		self.rebuild();
		true
	}

	pub fn add_favorite(&mut self, item: SymbolItem) -> Result<(), FavoriteRejection> {
		self.favorites.add(item)
	}

	pub fn remove_favorite(&mut self, item: &str) {
		self.favorites.remove(item);
	}

	pub fn toggle_favorite(&mut self, item: SymbolItem) -> Result<bool, FavoriteRejection> {
		self.favorites.toggle(item)
	}

	pub fn is_favorite(&self, item: &str) -> bool {
		self.favorites.contains(item)
	}

	pub fn favorites(&self) -> &[SymbolItem] {
		self.favorites.list()
	}

	pub fn record(&mut self, item: &SymbolItem) {
		self.ledger.record(item);
	}

	pub fn ranked_recent(&self, limit: usize) -> Vec<SymbolItem> {
		self.ledger.ranked_recent(limit)
	}

	pub fn ledger(&self) -> &UsageLedger {
		&self.ledger
	}

	/// Opens a picker session on `tab` over the current snapshots.
	pub fn open_picker(&self, tab: Tab) -> Result<PickerState, SessionEnd> {
		PickerState::open(self.picker_context(), tab)
	}

	/// Opens a picker session on the favorites tab.
	pub fn open_favorites(&self) -> Result<PickerState, SessionEnd> {
		self.open_picker(Tab::Favorites)
	}

	/// Feeds `key` to `session`, inserting committed items into `target`.
	///
	/// Returns how the session ended, or `None` while it stays open. A rejected
	/// favorite toggle is returned as an error; the session stays open.
	pub fn handle_picker_key(
		&mut self,
		session: &mut PickerState,
		key: Key,
		target: &mut dyn TextTarget,
	) -> Result<Option<SessionEnd>, FavoriteRejection> {
		match session.handle_key(key) {
			PickerOutcome::Commit(item) => {
				target.replace_before_cursor(0, item.as_str());
				self.ledger.record(&item);
				Ok(Some(SessionEnd::Committed(item)))
			}
			PickerOutcome::ToggleFavorite(item) => {
				let toggled = self.favorites.toggle(item);
				session.refresh_favorites(self.favorites.list().to_vec());
				match toggled {
					Ok(pinned) => {
						debug!(pinned, count = self.favorites.list().len(), "Favorite toggled");
						Ok(None)
					}
					Err(error) => {
						debug!(%error, "Favorite toggle rejected");
						Err(error)
					}
				}
			}
			PickerOutcome::Close => Ok(Some(SessionEnd::Dismissed)),
			PickerOutcome::Redraw | PickerOutcome::EmptySlot | PickerOutcome::Ignored => Ok(None),
		}
	}

	/// Replaces the static catalog with `text`.
	///
	/// A malformed document leaves the current snapshots in place.
	pub fn reload_catalog(&mut self, text: &str) -> Result<(), SourceError> {
		let source = match CatalogSource::from_toml_str(text) {
			Ok(source) => source,
			Err(error) => {
				warn!(%error, "Catalog reload rejected, keeping current catalog");
				return Err(error);
			}
		};
		self.source = source;
		self.rebuild();
		Ok(())
	}

	fn picker_context(&self) -> PickerContext {
		PickerContext {
			catalog: self.catalog.snapshot(),
			shortcodes: self.shortcodes.snapshot(),
			favorites: self.favorites.list().to_vec(),
			recent: self.ledger.ranked_recent(QUICK_RECALL_SLOTS),
			layout: self.config.key_layout,
			quick_recall_modifier: self.config.quick_recall_modifier,
		}
	}

	fn rebuild(&self) {
		self.shortcodes.reload(ShortcodeTable::build(&self.source, self.custom.shortcodes()));
		self.catalog.reload(CategoryCatalog::build(&self.source, &self.custom));
	}

	fn save_custom(&self) {
		if let Err(error) = save_json(self.store.as_ref(), CUSTOM_ENTRIES_KEY, &self.custom) {
			warn!(%error, "Failed to persist custom entries");
		}
	}
}

#[cfg(test)]
mod tests;
