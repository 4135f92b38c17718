//! Picker navigation state.

use std::sync::Arc;

use glyphgrid_catalog::CategoryCatalog;
use glyphgrid_primitives::{Domain, KeyLayout, KeyPosition, Modifier, PAGE_SIZE, SymbolItem, Tab, wrap_index};
use glyphgrid_shortcode::ShortcodeTable;
use tracing::debug;

/// Number of slots reachable through the quick-recall chord.
pub const QUICK_RECALL_SLOTS: usize = 10;

/// Everything a session reads, captured when it opens.
#[derive(Clone)]
pub struct PickerContext {
	pub catalog: Arc<CategoryCatalog>,
	pub shortcodes: Arc<ShortcodeTable>,
	pub favorites: Vec<SymbolItem>,
	/// `ranked_recent(QUICK_RECALL_SLOTS)` at open time.
	pub recent: Vec<SymbolItem>,
	pub layout: KeyLayout,
	pub quick_recall_modifier: Modifier,
}

/// Why a session ended, or never started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
	/// Opened on an empty favorites tab.
	NoFavorites,
	/// Closed without a selection.
	Dismissed,
	/// Closed after committing an item.
	Committed(SymbolItem),
}

/// Navigation state of one open picker.
///
/// `page` always lies in `0..total_pages()`; changing tab, category or search
/// query resets it to 0.
pub struct PickerState {
	tab: Tab,
	symbol_category: Option<Arc<str>>,
	emoji_category: Option<Arc<str>>,
	page: usize,
	search_query: String,
	/// Sequence currently paged through.
	items: Vec<SymbolItem>,
	ctx: PickerContext,
}

impl PickerState {
	/// Opens a session on `tab`.
	///
	/// Opening on [`Tab::Favorites`] with no favorites closes immediately.
	pub fn open(ctx: PickerContext, tab: Tab) -> Result<Self, SessionEnd> {
		if tab == Tab::Favorites && ctx.favorites.is_empty() {
			debug!("Picker opened with no favorites, closing");
			return Err(SessionEnd::NoFavorites);
		}
		let mut state = Self {
			tab: Tab::Favorites,
			symbol_category: None,
			emoji_category: None,
			page: 0,
			search_query: String::new(),
			items: ctx.favorites.clone(),
			ctx,
		};
		state.switch_tab(tab);
		Ok(state)
	}

	pub fn tab(&self) -> Tab {
		self.tab
	}

	/// Active category of the active tab.
	pub fn category(&self) -> Option<&str> {
		match self.tab {
			Tab::Favorites => None,
			Tab::Symbols => self.symbol_category.as_deref(),
			Tab::Emojis => self.emoji_category.as_deref(),
		}
	}

	pub fn page(&self) -> usize {
		self.page
	}

	pub fn search_query(&self) -> &str {
		&self.search_query
	}

	pub fn context(&self) -> &PickerContext {
		&self.ctx
	}

	/// The full item sequence being paged.
	pub fn items(&self) -> &[SymbolItem] {
		&self.items
	}

	/// `ceil(items / PAGE_SIZE)`, never less than one.
	pub fn total_pages(&self) -> usize {
		self.items.len().div_ceil(PAGE_SIZE).max(1)
	}

	/// Whether the category selector is shown.
	pub fn category_selector_visible(&self) -> bool {
		self.tab.has_categories() && self.search_query.is_empty()
	}

	/// Category names of the active tab, empty on favorites.
	pub fn category_names(&self) -> Vec<&str> {
		match self.tab.domain() {
			Some(domain) => self.ctx.catalog.category_names_in(domain),
			None => Vec::new(),
		}
	}

	/// Items on the current page by key slot; `None` for empty slots.
	pub fn page_slots(&self) -> Vec<Option<&SymbolItem>> {
		(0..PAGE_SIZE).map(|idx| self.items.get(self.page * PAGE_SIZE + idx)).collect()
	}

	/// Switches tab. Returns false when `tab` is already active.
	pub fn switch_tab(&mut self, tab: Tab) -> bool {
		if tab == self.tab {
			return false;
		}
		self.tab = tab;
		if let Some(domain) = tab.domain()
			&& self.category().is_none()
		{
			let first = self.ctx.catalog.category_names_in(domain).first().map(|name| Arc::from(*name));
			self.set_category_slot(domain, first);
		}
		self.page = 0;
		self.rebuild_items();
		debug!(?tab, category = ?self.category(), "Switched picker tab");
		true
	}

	/// Selects a category of the active tab. Unknown names and the favorites
	/// tab leave the state untouched.
	pub fn switch_category(&mut self, name: &str) -> bool {
		let Some(domain) = self.tab.domain() else {
			return false;
		};
		if self.ctx.catalog.category_in(domain, name).is_none() {
			return false;
		}
		self.set_category_slot(domain, Some(Arc::from(name)));
		self.page = 0;
		self.rebuild_items();
		true
	}

	/// Moves to the previous or next category, wrapping at both ends.
	///
	/// Disabled on favorites and while a search is active.
	pub fn navigate_category(&mut self, delta: isize) -> bool {
		if !self.category_selector_visible() {
			return false;
		}
		let next = {
			let names = self.category_names();
			if names.is_empty() {
				return false;
			}
			let current = self.category().and_then(|c| names.iter().position(|n| *n == c)).unwrap_or(0);
			names[wrap_index(current, delta, names.len())].to_string()
		};
		self.switch_category(&next)
	}

	/// Moves to the previous or next page, wrapping at both ends.
	pub fn navigate_page(&mut self, delta: isize) -> bool {
		let total = self.total_pages();
		let next = wrap_index(self.page, delta, total);
		let changed = next != self.page;
		self.page = next;
		changed
	}

	/// Sets the search overlay. A non-empty query pages over every catalog item
	/// whose shortcode contains it.
	pub fn set_search(&mut self, query: &str) -> bool {
		let query = query.trim();
		if query == self.search_query {
			return false;
		}
		self.search_query = query.to_string();
		self.page = 0;
		self.rebuild_items();
		true
	}

	/// Item under a physical key on the current page.
	pub fn resolve_key_to_item(&self, position: KeyPosition) -> Option<&SymbolItem> {
		self.items.get(self.page * PAGE_SIZE + position.index())
	}

	/// Item under the key engraved with `legend` in the configured layout.
	pub fn resolve_legend(&self, legend: char) -> Option<&SymbolItem> {
		self.ctx.layout.position(legend).and_then(|pos| self.resolve_key_to_item(pos))
	}

	/// Item at `digit` in the ranked recent list, regardless of navigation.
	pub fn quick_recall(&self, digit: usize) -> Option<&SymbolItem> {
		(digit < QUICK_RECALL_SLOTS).then(|| self.ctx.recent.get(digit)).flatten()
	}

	/// Replaces the favorites snapshot, keeping the page in range.
	pub fn refresh_favorites(&mut self, favorites: Vec<SymbolItem>) {
		self.ctx.favorites = favorites;
		if self.tab == Tab::Favorites && self.search_query.is_empty() {
			self.rebuild_items();
		}
	}

	pub fn is_favorite(&self, item: &SymbolItem) -> bool {
		self.ctx.favorites.contains(item)
	}

	fn set_category_slot(&mut self, domain: Domain, name: Option<Arc<str>>) {
		match domain {
			Domain::Symbols => self.symbol_category = name,
			Domain::Emojis => self.emoji_category = name,
		}
	}

	fn rebuild_items(&mut self) {
		self.items = if !self.search_query.is_empty() {
			let query = self.search_query.to_ascii_lowercase();
			self.ctx
				.catalog
				.all_items()
				.iter()
				.filter(|item| self.ctx.shortcodes.item_matches(item, &query))
				.cloned()
				.collect()
		} else {
			match self.tab {
				Tab::Favorites => self.ctx.favorites.clone(),
				Tab::Symbols | Tab::Emojis => self
					.tab
					.domain()
					.zip(self.category())
					.and_then(|(domain, name)| self.ctx.catalog.items_in(domain, name))
					.map(<[SymbolItem]>::to_vec)
					.unwrap_or_default(),
			}
		};
		self.page = self.page.min(self.total_pages() - 1);
	}
}
