//! Immutable shortcode table built from layered definitions.

use glyphgrid_data::CatalogSource;
use glyphgrid_primitives::{SymbolItem, Token};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Which definition layer a shortcode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
	Emoji,
	Symbol,
	Custom,
}

/// Bidirectional token/item map.
///
/// Each token resolves to exactly one item; each item has at most one canonical
/// token for reverse lookup. The table is never mutated after [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ShortcodeTable {
	forward: FxHashMap<Token, SymbolItem>,
	reverse: FxHashMap<SymbolItem, Token>,
	/// Every token resolving to an item, shortest first.
	aliases: FxHashMap<SymbolItem, Vec<Token>>,
	/// All tokens ordered by `(len, lexicographic)`.
	sorted: Vec<Token>,
}

impl ShortcodeTable {
	/// Merges base emoji, symbol overrides and custom definitions, later layers winning.
	pub fn build<'a, I>(source: &CatalogSource, custom: I) -> Self
	where
		I: IntoIterator<Item = (&'a Token, &'a SymbolItem)>,
	{
		let mut builder = LayerBuilder::default();

		builder.begin(Layer::Emoji);
		for def in &source.emojis {
			for (idx, alias) in def.aliases.iter().enumerate() {
				builder.define(alias, &def.item, idx == 0);
			}
		}

		builder.begin(Layer::Symbol);
		for def in &source.symbols {
			builder.define(&def.token, &def.item, true);
		}

		builder.begin(Layer::Custom);
		for (token, item) in custom {
			builder.define(token, item, true);
		}

		let table = builder.finish();
		debug!(tokens = table.forward.len(), canonical = table.reverse.len(), "Built shortcode table");
		table
	}

	/// Resolves a token, ignoring ASCII case.
	pub fn resolve(&self, token: &str) -> Option<&SymbolItem> {
		if token.bytes().any(|b| b.is_ascii_uppercase()) {
			self.forward.get(token.to_ascii_lowercase().as_str())
		} else {
			self.forward.get(token)
		}
	}

	/// Canonical token for an item, exact match only.
	pub fn reverse_lookup(&self, item: &str) -> Option<&Token> {
		self.reverse.get(item)
	}

	/// Tokens starting with `prefix` (ignoring case), shortest first then lexicographic.
	///
	/// An empty prefix always yields nothing.
	pub fn search_by_prefix(&self, prefix: &str, limit: usize) -> Vec<(SymbolItem, Token)> {
		if prefix.is_empty() || limit == 0 {
			return Vec::new();
		}
		let prefix = prefix.to_ascii_lowercase();
		self.sorted
			.iter()
			.filter(|token| token.as_str().starts_with(prefix.as_str()))
			.filter_map(|token| self.forward.get(token).map(|item| (item.clone(), token.clone())))
			.take(limit)
			.collect()
	}

	/// Every token currently resolving to `item`, shortest first.
	pub fn aliases(&self, item: &str) -> &[Token] {
		self.aliases.get(item).map(Vec::as_slice).unwrap_or_default()
	}

	/// Returns true if `item` equals the query or one of its aliases contains it.
	///
	/// `query_lower` must already be ASCII-lowercased.
	pub fn item_matches(&self, item: &SymbolItem, query_lower: &str) -> bool {
		item.as_str() == query_lower || self.aliases(item.as_str()).iter().any(|t| t.as_str().contains(query_lower))
	}

	pub fn len(&self) -> usize {
		self.forward.len()
	}

	pub fn is_empty(&self) -> bool {
		self.forward.is_empty()
	}
}

#[derive(Default)]
struct LayerBuilder {
	forward: FxHashMap<Token, SymbolItem>,
	reverse: FxHashMap<SymbolItem, Token>,
	/// Items whose canonical token was already chosen in the current layer.
	claimed: FxHashSet<SymbolItem>,
	layer: Option<Layer>,
}

impl LayerBuilder {
	fn begin(&mut self, layer: Layer) {
		self.claimed.clear();
		self.layer = Some(layer);
	}

	fn define(&mut self, token: &Token, item: &SymbolItem, canonical: bool) {
		if let Some(previous) = self.forward.insert(token.clone(), item.clone())
			&& previous != *item
			&& self.reverse.get(&previous) == Some(token)
		{
			self.reverse.remove(&previous);
			tracing::trace!(layer = ?self.layer, %token, %previous, %item, "Shortcode redefined");
		}

		if canonical && self.claimed.insert(item.clone()) {
			self.reverse.insert(item.clone(), token.clone());
		}
	}

	fn finish(self) -> ShortcodeTable {
		let mut sorted: Vec<Token> = self.forward.keys().cloned().collect();
		sorted.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

		let mut aliases: FxHashMap<SymbolItem, Vec<Token>> = FxHashMap::default();
		for token in &sorted {
			if let Some(item) = self.forward.get(token) {
				aliases.entry(item.clone()).or_default().push(token.clone());
			}
		}

		ShortcodeTable {
			forward: self.forward,
			reverse: self.reverse,
			aliases,
			sorted,
		}
	}
}
