//! Immutable category catalog snapshots.

use std::sync::Arc;

use glyphgrid_data::CatalogSource;
use glyphgrid_primitives::{Domain, SymbolItem};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::custom::CustomEntries;

/// A named, ordered grouping of items.
#[derive(Debug, Clone)]
pub struct Category {
	name: Arc<str>,
	domain: Domain,
	items: Vec<SymbolItem>,
	/// Items before this index came from static definitions.
	static_len: usize,
}

impl Category {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn domain(&self) -> Domain {
		self.domain
	}

	/// Static items followed by custom items.
	pub fn items(&self) -> &[SymbolItem] {
		&self.items
	}

	pub fn custom_items(&self) -> &[SymbolItem] {
		&self.items[self.static_len..]
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

struct StaticEntry {
	rank: i32,
	seq: usize,
	item: SymbolItem,
}

/// Category partition of every browsable item.
///
/// Static emoji items carrying a skin-tone modifier or zero-width joiner are
/// left out; custom items are appended unfiltered.
#[derive(Debug, Default)]
pub struct CategoryCatalog {
	categories: Vec<Category>,
	by_name: FxHashMap<Domain, FxHashMap<Arc<str>, usize>>,
	all_items: Vec<SymbolItem>,
	filtered: usize,
}

impl CategoryCatalog {
	pub fn build(source: &CatalogSource, custom: &CustomEntries) -> Self {
		let mut order: Vec<(Domain, Arc<str>)> = Vec::new();
		let mut pending: FxHashMap<(Domain, Arc<str>), Vec<StaticEntry>> = FxHashMap::default();
		let mut filtered = 0;
		let mut seq = 0;

		let symbol_defs = source.symbols.iter().filter_map(|d| d.category.as_ref().map(|c| (c, Domain::Symbols, d.rank, &d.item)));
		let emoji_defs = source.emojis.iter().map(|d| (&d.category, Domain::Emojis, d.rank, &d.item));

		for (category, domain, rank, item) in symbol_defs.chain(emoji_defs) {
			let key = (domain, Arc::clone(category));
			let entries = pending.entry(key.clone()).or_insert_with(|| {
				order.push(key);
				Vec::new()
			});
			if item.is_complex() {
				filtered += 1;
				continue;
			}
			entries.push(StaticEntry { rank, seq, item: item.clone() });
			seq += 1;
		}

		let mut catalog = Self {
			filtered,
			..Self::default()
		};

		let mut with_custom: FxHashSet<Arc<str>> = FxHashSet::default();
		for (domain, name) in order {
			let mut entries = pending.remove(&(domain, Arc::clone(&name))).unwrap_or_default();
			entries.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.seq.cmp(&b.seq)));

			let mut seen = FxHashSet::default();
			let mut items: Vec<SymbolItem> = entries.into_iter().filter(|e| seen.insert(e.item.clone())).map(|e| e.item).collect();
			let static_len = items.len();
			if with_custom.insert(Arc::clone(&name)) {
				items.extend(custom.entries_in(&name).iter().map(|e| e.item.clone()));
			} else {
				warn!(category = %name, "Category name used by both symbols and emojis");
			}

			catalog.push(Category {
				name,
				domain,
				items,
				static_len,
			});
		}

		for name in custom.categories() {
			if with_custom.contains(name) {
				continue;
			}
			catalog.push(Category {
				name: Arc::from(name),
				domain: Domain::Symbols,
				items: custom.entries_in(name).iter().map(|e| e.item.clone()).collect(),
				static_len: 0,
			});
		}

		let mut seen = FxHashSet::default();
		catalog.all_items = catalog
			.categories
			.iter()
			.flat_map(|c| c.items.iter())
			.filter(|item| seen.insert((*item).clone()))
			.cloned()
			.collect();

		debug!(
			categories = catalog.categories.len(),
			items = catalog.all_items.len(),
			filtered = catalog.filtered,
			"Built category catalog"
		);
		catalog
	}

	fn push(&mut self, category: Category) {
		let idx = self.categories.len();
		self.by_name.entry(category.domain).or_default().insert(Arc::clone(&category.name), idx);
		self.categories.push(category);
	}

	/// Looks a category up by name, preferring the Symbols domain when both
	/// domains use the name.
	pub fn category(&self, name: &str) -> Option<&Category> {
		self.category_in(Domain::Symbols, name).or_else(|| self.category_in(Domain::Emojis, name))
	}

	pub fn category_in(&self, domain: Domain, name: &str) -> Option<&Category> {
		let idx = *self.by_name.get(&domain)?.get(name)?;
		self.categories.get(idx)
	}

	/// Items of a category: static ones by rank, then custom ones in insertion order.
	pub fn items_for(&self, name: &str) -> Option<&[SymbolItem]> {
		self.category(name).map(Category::items)
	}

	/// Items of the category called `name` within `domain`.
	pub fn items_in(&self, domain: Domain, name: &str) -> Option<&[SymbolItem]> {
		self.category_in(domain, name).map(Category::items)
	}

	/// All category names, symbol categories first.
	pub fn category_names(&self) -> Vec<&str> {
		self.categories.iter().map(Category::name).collect()
	}

	/// Category names of one domain in display order.
	pub fn category_names_in(&self, domain: Domain) -> Vec<&str> {
		self.categories.iter().filter(|c| c.domain == domain).map(Category::name).collect()
	}

	pub fn categories(&self) -> &[Category] {
		&self.categories
	}

	/// Every item once, in category order.
	pub fn all_items(&self) -> &[SymbolItem] {
		&self.all_items
	}

	/// Number of static items dropped as complex.
	pub fn filtered_count(&self) -> usize {
		self.filtered
	}
}
