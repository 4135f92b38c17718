//! Physical key grid.
//!
//! Items are laid out over the letter keys by physical position, so the first
//! item on a page always sits under the top-left key whatever its legend.

use serde::{Deserialize, Serialize};

/// Number of keys in each physical row, top to bottom.
pub const GRID_ROWS: [usize; 3] = [10, 9, 7];

/// Number of item slots on one page.
pub const PAGE_SIZE: usize = 26;

/// Logical index of a key in the physical grid (`0..PAGE_SIZE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPosition(u8);

impl KeyPosition {
	/// Returns the position for a raw index, `None` when off the grid.
	pub fn new(index: usize) -> Option<Self> {
		(index < PAGE_SIZE).then(|| Self(index as u8))
	}

	/// Returns the position for a `(row, column)` pair, `None` when off the grid.
	pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
		let width = *GRID_ROWS.get(row)?;
		if col >= width {
			return None;
		}
		let offset: usize = GRID_ROWS[..row].iter().sum();
		Self::new(offset + col)
	}

	pub fn index(self) -> usize {
		self.0 as usize
	}

	/// Returns `(row, column)`.
	pub fn row_col(self) -> (usize, usize) {
		let mut remaining = self.index();
		for (row, width) in GRID_ROWS.iter().enumerate() {
			if remaining < *width {
				return (row, remaining);
			}
			remaining -= width;
		}
		unreachable!("KeyPosition is always below PAGE_SIZE")
	}
}

/// Legend printed on the physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyLayout {
	#[default]
	Qwerty,
	Qwertz,
}

impl KeyLayout {
	fn rows(self) -> [&'static str; 3] {
		match self {
			KeyLayout::Qwerty => ["qwertyuiop", "asdfghjkl", "zxcvbnm"],
			KeyLayout::Qwertz => ["qwertzuiop", "asdfghjkl", "yxcvbnm"],
		}
	}

	/// Maps an engraved letter (either case) to its grid position.
	pub fn position(self, c: char) -> Option<KeyPosition> {
		let c = c.to_ascii_lowercase();
		self.rows()
			.iter()
			.enumerate()
			.find_map(|(row, legend)| legend.chars().position(|k| k == c).and_then(|col| KeyPosition::from_row_col(row, col)))
	}

	/// Letter engraved at `position`.
	pub fn legend(self, position: KeyPosition) -> char {
		let (row, col) = position.row_col();
		self.rows()[row].chars().nth(col).unwrap_or(' ')
	}
}
