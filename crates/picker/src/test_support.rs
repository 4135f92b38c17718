use std::sync::Arc;

use glyphgrid_catalog::{CategoryCatalog, CustomEntries};
use glyphgrid_data::CatalogSource;
use glyphgrid_primitives::{KeyLayout, Modifier, SymbolItem};
use glyphgrid_shortcode::ShortcodeTable;

use crate::PickerContext;

/// Thirty "Math" symbols `U+2200..U+221D` tokened `math0..math29` in rank
/// order, two arrows, and a handful of emojis.
pub(crate) fn source() -> CatalogSource {
	let mut text = String::from("symbol = [\n");
	for i in 0..30u32 {
		let c = char::from_u32(0x2200 + i).unwrap();
		text.push_str(&format!("{{ token = \"math{i}\", symbol = \"{c}\", category = \"Math\", rank = {i} }},\n"));
	}
	text.push_str(
		r#"
		{ token = "rarr", symbol = "→", category = "Arrows" },
		{ token = "larr", symbol = "←", category = "Arrows" },
		]
		emoji = [
			{ codepoints = "1F600", aliases = ["grinning"], category = "Smileys & Emotion", rank = 1 },
			{ codepoints = "1F602", aliases = ["joy"], category = "Smileys & Emotion", rank = 2 },
			{ codepoints = "1F436", aliases = ["dog"], category = "Animals & Nature", rank = 1 },
		]
		"#,
	);
	CatalogSource::from_toml_str(&text).unwrap()
}

pub(crate) fn item(s: &str) -> SymbolItem {
	SymbolItem::new(s).unwrap()
}

/// The `n`-th Math symbol.
pub(crate) fn math(n: u32) -> SymbolItem {
	SymbolItem::from_chars(&[char::from_u32(0x2200 + n).unwrap()]).unwrap()
}

pub(crate) fn context(favorites: Vec<SymbolItem>, recent: Vec<SymbolItem>) -> PickerContext {
	let source = source();
	let custom = CustomEntries::default();
	PickerContext {
		catalog: Arc::new(CategoryCatalog::build(&source, &custom)),
		shortcodes: Arc::new(ShortcodeTable::build(&source, custom.shortcodes())),
		favorites,
		recent,
		layout: KeyLayout::Qwerty,
		quick_recall_modifier: Modifier::Alt,
	}
}
