//! Minimal hardcoded catalog used when the configured definitions are unusable.

use std::sync::Arc;

use glyphgrid_primitives::{SymbolItem, Token};

use crate::source::{CatalogSource, EmojiDef, SymbolDef};

const FALLBACK_SYMBOLS: &[(&str, &str, &str)] = &[
	("plus_minus", "±", "Math"),
	("times", "×", "Math"),
	("divide", "÷", "Math"),
	("neq", "≠", "Math"),
	("leq", "≤", "Math"),
	("geq", "≥", "Math"),
	("degree", "°", "Math"),
	("rarr", "→", "Arrows"),
	("larr", "←", "Arrows"),
	("uarr", "↑", "Arrows"),
	("darr", "↓", "Arrows"),
	("euro", "€", "Currency"),
	("pound", "£", "Currency"),
	("mdash", "—", "Punctuation"),
	("ellipsis", "…", "Punctuation"),
	("bullet", "•", "Punctuation"),
];

const FALLBACK_EMOJIS: &[(&str, &str)] = &[
	("grinning", "😀"),
	("joy", "😂"),
	("wink", "😉"),
	("heart", "❤️"),
	("thumbsup", "👍"),
	("tada", "🎉"),
];

impl CatalogSource {
	/// A small always-valid catalog so the picker degrades instead of disappearing.
	pub fn fallback() -> Self {
		let symbols = FALLBACK_SYMBOLS
			.iter()
			.zip(1..)
			.filter_map(|(&(token, symbol, category), rank)| {
				Some(SymbolDef {
					token: Token::parse(token).ok()?,
					item: SymbolItem::new(symbol).ok()?,
					category: Some(Arc::from(category)),
					rank,
				})
			})
			.collect();

		let emojis = FALLBACK_EMOJIS
			.iter()
			.zip(1..)
			.filter_map(|(&(alias, emoji), rank)| {
				Some(EmojiDef {
					item: SymbolItem::new(emoji).ok()?,
					aliases: vec![Token::parse(alias).ok()?],
					category: Arc::from("Smileys & Emotion"),
					rank,
				})
			})
			.collect();

		Self {
			emojis,
			symbols,
			..Self::default()
		}
	}
}
