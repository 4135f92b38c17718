//! Key dispatch for an open picker.

use glyphgrid_primitives::{Key, KeyCode, SpecialKey, SymbolItem};
use tracing::trace;

use crate::PickerState;

/// Result of feeding one key to the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
	/// Insert this item and end the session.
	Commit(SymbolItem),
	/// Pin or unpin this item; the session stays open.
	ToggleFavorite(SymbolItem),
	/// Navigation state changed.
	Redraw,
	/// The key maps to a slot with no item on this page.
	EmptySlot,
	/// End the session without a selection.
	Close,
	/// The key means nothing here.
	Ignored,
}

impl PickerState {
	/// Interprets a key:
	///
	/// * letter: commit the item under that physical key
	/// * Shift + letter: toggle it as favorite
	/// * quick-recall modifier + digit: commit from the recent ranking
	/// * Left/Right cycle categories, Up/Down pages, Tab/BackTab tabs
	/// * Escape: close
	pub fn handle_key(&mut self, key: Key) -> PickerOutcome {
		let outcome = self.dispatch(key);
		trace!(?key, ?outcome, tab = ?self.tab(), page = self.page(), "Picker key");
		outcome
	}

	fn dispatch(&mut self, key: Key) -> PickerOutcome {
		match key.code {
			KeyCode::Special(special) => self.handle_special(special),
			KeyCode::Char(c) => {
				let mods = key.modifiers;
				if mods.has(self.context().quick_recall_modifier)
					&& let Some(digit) = key.digit()
				{
					return match self.quick_recall(digit as usize) {
						Some(item) => PickerOutcome::Commit(item.clone()),
						None => PickerOutcome::EmptySlot,
					};
				}
				if mods.ctrl || mods.alt {
					return PickerOutcome::Ignored;
				}
				if self.context().layout.position(c).is_none() {
					return PickerOutcome::Ignored;
				}

				let Some(item) = self.resolve_legend(c).cloned() else {
					return PickerOutcome::EmptySlot;
				};
				if mods.shift || c.is_ascii_uppercase() {
					PickerOutcome::ToggleFavorite(item)
				} else {
					PickerOutcome::Commit(item)
				}
			}
		}
	}

	fn handle_special(&mut self, key: SpecialKey) -> PickerOutcome {
		let changed = match key {
			SpecialKey::Escape => return PickerOutcome::Close,
			SpecialKey::Left => self.navigate_category(-1),
			SpecialKey::Right => self.navigate_category(1),
			SpecialKey::Up => self.navigate_page(-1),
			SpecialKey::Down => self.navigate_page(1),
			SpecialKey::Tab => self.switch_tab(self.tab().cycle(1)),
			SpecialKey::BackTab => self.switch_tab(self.tab().cycle(-1)),
			SpecialKey::Enter | SpecialKey::Backspace => false,
		};
		if changed { PickerOutcome::Redraw } else { PickerOutcome::Ignored }
	}
}
