use glyphgrid_data::CatalogSource;
use glyphgrid_primitives::{Domain, SymbolItem};
use pretty_assertions::assert_eq;

use super::*;

fn source() -> CatalogSource {
	CatalogSource::from_toml_str(
		r#"
		emoji = [
			{ codepoints = "1F44D", aliases = ["thumbsup"], category = "People & Body", rank = 3 },
			{ codepoints = "1F44D 1F3FD", aliases = ["thumbsup_tone3"], category = "People & Body", rank = 1 },
			{ codepoints = "1F468 200D 1F4BB", aliases = ["technologist"], category = "People & Body", rank = 2 },
			{ codepoints = "1F44B", aliases = ["wave"], category = "People & Body", rank = 3 },
			{ codepoints = "1F44F", aliases = ["clap"], category = "People & Body", rank = 2 },
			{ codepoints = "1F525", aliases = ["fire"], category = "Symbols", rank = 1 },
		]
		symbol = [
			{ token = "times", symbol = "×", category = "Math", rank = 2 },
			{ token = "plus_minus", symbol = "±", category = "Math", rank = 1 },
			{ token = "heart", symbol = "♥" },
			{ token = "rarr", symbol = "→", category = "Arrows" },
		]
		"#,
	)
	.unwrap()
}

fn strs(items: &[SymbolItem]) -> Vec<&str> {
	items.iter().map(SymbolItem::as_str).collect()
}

#[test]
fn static_items_sorted_by_rank_then_insertion() {
	let catalog = CategoryCatalog::build(&source(), &CustomEntries::default());
	assert_eq!(strs(catalog.items_for("Math").unwrap()), vec!["±", "×"]);
	assert_eq!(strs(catalog.items_for("People & Body").unwrap()), vec!["👏", "👍", "👋"]);
}

#[test]
fn complex_static_items_are_filtered() {
	let catalog = CategoryCatalog::build(&source(), &CustomEntries::default());
	let people = catalog.items_for("People & Body").unwrap();
	assert!(people.iter().all(|i| !i.is_complex()));
	assert_eq!(catalog.filtered_count(), 2);
}

#[test]
fn category_names_grouped_by_domain() {
	let catalog = CategoryCatalog::build(&source(), &CustomEntries::default());
	assert_eq!(catalog.category_names(), vec!["Math", "Arrows", "People & Body", "Symbols"]);
	assert_eq!(catalog.category_names_in(Domain::Symbols), vec!["Math", "Arrows"]);
	assert_eq!(catalog.category_names_in(Domain::Emojis), vec!["People & Body", "Symbols"]);
	assert!(catalog.items_for("Missing").is_none());
	// Override-only symbols are not listed anywhere.
	assert!(!strs(catalog.all_items()).contains(&"♥"));
}

#[test]
fn custom_items_append_unfiltered() {
	let mut custom = CustomEntries::default();
	custom.add("👍🏽", "my_thumb", "People & Body").unwrap();
	custom.add("👍", "dup_of_static", "People & Body").unwrap();

	let catalog = CategoryCatalog::build(&source(), &custom);
	let people = catalog.category("People & Body").unwrap();
	assert_eq!(strs(people.items()), vec!["👏", "👍", "👋", "👍🏽", "👍"]);
	assert_eq!(strs(people.custom_items()), vec!["👍🏽", "👍"]);
	// all_items lists each item once.
	assert_eq!(catalog.all_items().iter().filter(|i| i.as_str() == "👍").count(), 1);
}

#[test]
fn custom_round_trip() {
	let mut custom = CustomEntries::default();
	custom.add("✓", "foo", "Symbols").unwrap();

	let catalog = CategoryCatalog::build(&source(), &custom);
	assert_eq!(catalog.items_for("Symbols").unwrap().last().map(SymbolItem::as_str), Some("✓"));

	assert!(custom.remove("✓", "Symbols"));
	let catalog = CategoryCatalog::build(&source(), &custom);
	assert!(!strs(catalog.items_for("Symbols").unwrap()).contains(&"✓"));

	assert!(!custom.remove("✓", "Symbols"));
	custom.add("✓", "foo", "Symbols").unwrap();
	assert_eq!(custom.entries_in("Symbols").len(), 1);
}

#[test]
fn custom_rejections() {
	let mut custom = CustomEntries::default();
	custom.add("✓", "check", "Math").unwrap();

	assert!(matches!(custom.add("✓", "other", "Math"), Err(CustomRejection::DuplicateItem { .. })));
	assert!(matches!(custom.add("✔", "CHECK", "Math"), Err(CustomRejection::DuplicateToken { .. })));
	assert!(matches!(custom.add("✔", "bad token", "Math"), Err(CustomRejection::InvalidToken(_))));
	assert!(matches!(custom.add("", "empty", "Math"), Err(CustomRejection::InvalidItem(_))));

	// Duplicates are scoped to one category.
	custom.add("✓", "check", "Arrows").unwrap();
	assert_eq!(custom.len(), 2);
}

#[test]
fn unknown_custom_category_becomes_symbol_category() {
	let mut custom = CustomEntries::default();
	custom.add("☕", "tea", "Drinks").unwrap();

	let catalog = CategoryCatalog::build(&source(), &custom);
	let drinks = catalog.category("Drinks").unwrap();
	assert_eq!(drinks.domain(), Domain::Symbols);
	assert_eq!(catalog.category_names_in(Domain::Symbols), vec!["Math", "Arrows", "Drinks"]);

	custom.remove("☕", "Drinks");
	assert!(custom.is_empty());
	let catalog = CategoryCatalog::build(&source(), &custom);
	assert!(catalog.category("Drinks").is_none());
}

#[test]
fn custom_entries_persist_as_structured_records() {
	let mut custom = CustomEntries::default();
	custom.add("✓", "check", "Math").unwrap();
	custom.add("☕", "tea", "Drinks").unwrap();

	let json = serde_json::to_string(&custom).unwrap();
	assert_eq!(json, r#"{"Math":[{"item":"✓","token":"check"}],"Drinks":[{"item":"☕","token":"tea"}]}"#);
	let back: CustomEntries = serde_json::from_str(&json).unwrap();
	assert_eq!(back, custom);
}

#[test]
fn shared_category_name_keeps_domains_apart() {
	let source = CatalogSource::from_toml_str(
		r#"
		emoji = [
			{ codepoints = "1F525", aliases = ["fire"], category = "Symbols", rank = 1 },
			{ codepoints = "1F4AF", aliases = ["hundred"], category = "Symbols", rank = 2 },
		]
		symbol = [
			{ token = "section", symbol = "§", category = "Symbols", rank = 1 },
		]
		"#,
	)
	.unwrap();
	let mut custom = CustomEntries::default();
	custom.add("✓", "check", "Symbols").unwrap();
	let catalog = CategoryCatalog::build(&source, &custom);

	assert_eq!(catalog.category_names_in(Domain::Symbols), vec!["Symbols"]);
	assert_eq!(catalog.category_names_in(Domain::Emojis), vec!["Symbols"]);
	assert_eq!(strs(catalog.items_in(Domain::Symbols, "Symbols").unwrap()), vec!["§", "✓"]);
	assert_eq!(strs(catalog.items_in(Domain::Emojis, "Symbols").unwrap()), vec!["🔥", "💯"]);
	assert_eq!(catalog.category("Symbols").map(Category::domain), Some(Domain::Symbols));
	assert!(catalog.items_in(Domain::Emojis, "Missing").is_none());
}
