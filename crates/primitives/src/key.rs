//! Keys as the picker receives them from the host.

use serde::{Deserialize, Serialize};

/// Held modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	pub ctrl: bool,
	pub alt: bool,
	pub shift: bool,
}

impl Modifiers {
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	pub const ALT: Self = Self {
		alt: true,
		..Self::NONE
	};

	/// Returns true if `modifier` is held.
	pub fn has(self, modifier: Modifier) -> bool {
		match modifier {
			Modifier::Ctrl => self.ctrl,
			Modifier::Alt => self.alt,
			Modifier::Shift => self.shift,
		}
	}
}

/// One modifier, as named in configuration (`"ctrl"`, `"alt"`, `"shift"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
	Ctrl,
	#[default]
	Alt,
	Shift,
}

/// Non-character keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
	Escape,
	Enter,
	Tab,
	BackTab,
	Left,
	Right,
	Up,
	Down,
	Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	/// Character engraved on the key, as reported by the active layout.
	Char(char),
	Special(SpecialKey),
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	pub const fn char(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::NONE,
		}
	}

	pub const fn special(key: SpecialKey) -> Self {
		Self {
			code: KeyCode::Special(key),
			modifiers: Modifiers::NONE,
		}
	}

	/// `c` with Alt held, the default quick-recall chord.
	pub const fn alt(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::ALT,
		}
	}

	pub const fn with_shift(mut self) -> Self {
		self.modifiers.shift = true;
		self
	}

	pub const fn with_ctrl(mut self) -> Self {
		self.modifiers.ctrl = true;
		self
	}

	/// Decimal digit on the key, whatever modifiers are held.
	pub fn digit(&self) -> Option<u32> {
		match self.code {
			KeyCode::Char(c) => c.to_digit(10),
			KeyCode::Special(_) => None,
		}
	}
}
