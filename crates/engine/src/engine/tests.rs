use std::sync::Arc;

use glyphgrid_primitives::{Domain, SpecialKey};
use glyphgrid_store::{FAVORITES_CAPACITY, ManualClock};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;
use crate::text::StringTarget;

const SOURCE: &str = r#"
emoji = [
	{ codepoints = "1F604", aliases = ["smile", "happy"], category = "Smileys & Emotion", rank = 1 },
	{ codepoints = "1F603", aliases = ["smiley"], category = "Smileys & Emotion", rank = 2 },
	{ codepoints = "1F642", aliases = ["sm"], category = "Smileys & Emotion", rank = 3 },
	{ codepoints = "2764 FE0F", aliases = ["red_heart", "heart"], category = "Smileys & Emotion", rank = 4 },
]
symbol = [
	{ token = "heart", symbol = "♥" },
	{ token = "pi", symbol = "π", category = "Greek", rank = 1 },
	{ token = "rarr", symbol = "→", category = "Arrows" },
]
"#;

fn item(s: &str) -> SymbolItem {
	SymbolItem::new(s).unwrap()
}

fn engine_with(config: EngineConfig, store: Arc<dyn KvStore>) -> Engine {
	let source = CatalogSource::from_toml_str(SOURCE).unwrap();
	Engine::with_parts(config, source, store, Arc::new(ManualClock::new(1_000)))
}

fn engine() -> Engine {
	engine_with(EngineConfig::default(), Arc::new(MemoryStore::new()))
}

#[test]
fn suggestions_for_token_being_typed() {
	let engine = engine();
	let suggestions = engine.suggestions("say :SM").unwrap();
	assert_eq!(suggestions.token, "SM");
	assert_eq!(suggestions.start, 4);
	assert_eq!(suggestions.delete_chars, 3);
	let tokens: Vec<&str> = suggestions.candidates.iter().map(|(_, t)| t.as_str()).collect();
	assert_eq!(tokens, vec!["sm", "smile", "smiley"]);

	assert_eq!(engine.suggestions("time: 5pm"), None);
	assert_eq!(engine.suggestions("no colon"), None);
	assert_eq!(engine.suggestions(":zzz"), None);
}

#[test]
fn suggestion_limit_truncates() {
	let config = EngineConfig {
		suggestion_limit: 2,
		..EngineConfig::default()
	};
	let engine = engine_with(config, Arc::new(MemoryStore::new()));
	assert_eq!(engine.suggestions(":s").unwrap().candidates.len(), 2);
}

#[test]
fn accepting_a_suggestion_edits_and_records() {
	let mut engine = engine();
	let mut target = StringTarget("hi :smi".into());
	assert!(engine.accept_suggestion(&mut target, &item("😄")));
	assert_eq!(target.0, "hi 😄");
	assert_eq!(engine.ranked_recent(5), vec![item("😄")]);

	let mut plain = StringTarget("hi".into());
	assert!(!engine.accept_suggestion(&mut plain, &item("😄")));
	assert_eq!(plain.0, "hi");
}

#[test]
fn closed_shortcode_auto_replaces() {
	let mut engine = engine();
	let mut target = StringTarget("I ❤ :heart:".into());
	assert_eq!(engine.auto_replace(&mut target), Some(item("♥")));
	assert_eq!(target.0, "I ❤ ♥");

	let mut unknown = StringTarget(":nope:".into());
	assert_eq!(engine.auto_replace(&mut unknown), None);
	assert_eq!(unknown.0, ":nope:");
}

#[test]
fn auto_replace_can_be_disabled() {
	let config = EngineConfig {
		auto_replace_closed: false,
		..EngineConfig::default()
	};
	let mut engine = engine_with(config, Arc::new(MemoryStore::new()));
	let mut target = StringTarget(":pi:".into());
	assert_eq!(engine.auto_replace(&mut target), None);
	assert_eq!(target.0, ":pi:");
}

#[test]
fn custom_entries_rebuild_both_snapshots() {
	let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
	let mut engine = engine_with(EngineConfig::default(), Arc::clone(&store));
	let before = engine.catalog();

	engine.add_custom("✓", "check", "Greek").unwrap();
	assert_eq!(engine.resolve("CHECK"), Some(item("✓")));
	assert_eq!(engine.catalog().items_for("Greek").unwrap(), &[item("π"), item("✓")]);
	assert_eq!(before.items_for("Greek").unwrap(), &[item("π")]);

	let reopened = engine_with(EngineConfig::default(), Arc::clone(&store));
	assert_eq!(reopened.resolve("check"), Some(item("✓")));

	assert!(engine.remove_custom("✓", "Greek"));
	assert!(!engine.remove_custom("✓", "Greek"));
	assert_eq!(engine.resolve("check"), None);
	assert!(engine.add_custom("✓", "check", "Greek").is_ok());
}

#[test]
fn custom_rejections_leave_state_alone() {
	let mut engine = engine();
	engine.add_custom("✓", "check", "Greek").unwrap();
	assert!(matches!(
		engine.add_custom("✔", "Check", "Greek"),
		Err(CustomRejection::DuplicateToken { .. })
	));
	assert!(matches!(engine.add_custom("✗", "no way", "Greek"), Err(CustomRejection::InvalidToken(_))));
	assert_eq!(engine.custom_entries().len(), 1);
}

#[test]
fn malformed_reload_keeps_current_catalog() {
	let mut engine = engine();
	assert!(engine.reload_catalog("emoji = 3").is_err());
	assert_eq!(engine.resolve("pi"), Some(item("π")));

	engine
		.reload_catalog(r#"symbol = [{ token = "tau", symbol = "τ", category = "Greek" }]"#)
		.unwrap();
	assert_eq!(engine.resolve("pi"), None);
	assert_eq!(engine.resolve("tau"), Some(item("τ")));
}

#[test]
fn picker_commit_inserts_and_records() {
	let mut engine = engine();
	let mut session = engine.open_picker(Tab::Symbols).unwrap();
	let mut target = StringTarget("x = ".into());

	assert_eq!(engine.handle_picker_key(&mut session, Key::char('q'), &mut target).unwrap(), Some(SessionEnd::Committed(item("π"))));
	assert_eq!(target.0, "x = π");
	assert_eq!(engine.ledger().get("π").map(|r| r.count), Some(1));
}

#[test]
fn picker_favorite_toggle_updates_session() {
	let mut engine = engine();
	assert!(matches!(engine.open_favorites(), Err(SessionEnd::NoFavorites)));

	let mut session = engine.open_picker(Tab::Symbols).unwrap();
	let mut target = StringTarget::default();
	assert_eq!(engine.handle_picker_key(&mut session, Key::char('Q'), &mut target).unwrap(), None);
	assert_eq!(engine.favorites(), &[item("π")]);
	assert!(session.is_favorite(&item("π")));
	assert_eq!(target.0, "");

	assert_eq!(engine.handle_picker_key(&mut session, Key::char('q').with_shift(), &mut target).unwrap(), None);
	assert!(engine.favorites().is_empty());
	assert_eq!(
		engine.handle_picker_key(&mut session, Key::special(SpecialKey::Escape), &mut target).unwrap(),
		Some(SessionEnd::Dismissed)
	);
}

#[test]
fn full_favorites_reject_picker_toggle() {
	let mut engine = engine();
	for n in 0..FAVORITES_CAPACITY as u32 {
		let c = char::from_u32(0x2200 + n).unwrap();
		engine.add_favorite(SymbolItem::from_chars(&[c]).unwrap()).unwrap();
	}
	let mut session = engine.open_picker(Tab::Symbols).unwrap();
	let mut target = StringTarget::default();

	assert_eq!(
		engine.handle_picker_key(&mut session, Key::char('Q'), &mut target),
		Err(FavoriteRejection::Full)
	);
	assert!(!engine.is_favorite("π"));
	assert!(!session.is_favorite(&item("π")));
	assert_eq!(engine.favorites().len(), FAVORITES_CAPACITY);
	assert_eq!(session.tab(), Tab::Symbols);
	assert_eq!(target.0, "");

	assert_eq!(engine.handle_picker_key(&mut session, Key::char('q'), &mut target), Ok(Some(SessionEnd::Committed(item("π")))));
}

#[test]
fn malformed_catalog_file_falls_back() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("catalog.toml");
	std::fs::write(&path, "symbol = \"not a table array\"").unwrap();
	let config = EngineConfig {
		catalog_path: Some(path),
		..EngineConfig::default()
	};

	let engine = Engine::new(config).unwrap();
	assert_eq!(engine.resolve("rarr"), Some(item("→")));
	assert_eq!(engine.resolve("pi"), None);
	let catalog = engine.catalog();
	assert!(catalog.category_names_in(Domain::Symbols).contains(&"Arrows"));
	assert!(catalog.category_names_in(Domain::Emojis).contains(&"Smileys & Emotion"));
}

#[test]
fn missing_catalog_file_falls_back() {
	let dir = TempDir::new().unwrap();
	let config = EngineConfig {
		catalog_path: Some(dir.path().join("absent.toml")),
		..EngineConfig::default()
	};
	let engine = Engine::new(config).unwrap();
	assert_eq!(engine.resolve("thumbsup"), Some(item("👍")));
}

#[test]
fn quick_recall_uses_ranking_at_open() {
	let mut engine = engine();
	engine.record(&item("→"));
	engine.record(&item("π"));
	engine.record(&item("π"));
	let mut session = engine.open_picker(Tab::Emojis).unwrap();
	let mut target = StringTarget::default();
	assert_eq!(engine.handle_picker_key(&mut session, Key::alt('1'), &mut target).unwrap(), Some(SessionEnd::Committed(item("→"))));
	assert_eq!(target.0, "→");
}
