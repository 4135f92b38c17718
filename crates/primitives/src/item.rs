//! Symbol items: a single emoji or symbol, possibly spanning several codepoints.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unicode_segmentation::UnicodeSegmentation;

/// Zero-width joiner used to glue emoji sequences together.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Inclusive range of the Fitzpatrick skin-tone modifier block.
pub const SKIN_TONE_MODIFIERS: std::ops::RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// Reasons a string cannot become a [`SymbolItem`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
	#[error("symbol item is empty")]
	Empty,
	#[error("symbol item {text:?} spans {graphemes} grapheme clusters")]
	NotSingleGrapheme { text: String, graphemes: usize },
}

/// An immutable emoji or symbol.
///
/// Always exactly one extended grapheme cluster. Cloning is a refcount bump,
/// equality is exact string equality.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolItem(Arc<str>);

impl SymbolItem {
	/// Validates and wraps `text`.
	pub fn new(text: &str) -> Result<Self, ItemError> {
		let graphemes = text.graphemes(true).count();
		match graphemes {
			0 => Err(ItemError::Empty),
			1 => Ok(Self(Arc::from(text))),
			_ => Err(ItemError::NotSingleGrapheme {
				text: text.to_string(),
				graphemes,
			}),
		}
	}

	/// Builds an item from a codepoint sequence.
	pub fn from_chars(chars: &[char]) -> Result<Self, ItemError> {
		let text: String = chars.iter().collect();
		Self::new(&text)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns true if the item carries a skin-tone modifier or a zero-width joiner.
	pub fn is_complex(&self) -> bool {
		self.0.chars().any(|c| c == ZERO_WIDTH_JOINER || SKIN_TONE_MODIFIERS.contains(&c))
	}
}

impl fmt::Debug for SymbolItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SymbolItem({:?})", &*self.0)
	}
}

impl fmt::Display for SymbolItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for SymbolItem {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl std::borrow::Borrow<str> for SymbolItem {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl TryFrom<&str> for SymbolItem {
	type Error = ItemError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl Serialize for SymbolItem {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for SymbolItem {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		Self::new(&text).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("π")]
	#[case("😀")]
	#[case("🇺🇸")]
	#[case("👍🏽")]
	#[case("👨\u{200D}👩\u{200D}👧")]
	fn single_graphemes_are_accepted(#[case] text: &str) {
		assert_eq!(SymbolItem::new(text).unwrap().as_str(), text);
	}

	#[test]
	fn empty_and_multi_grapheme_rejected() {
		assert_eq!(SymbolItem::new(""), Err(ItemError::Empty));
		assert!(matches!(SymbolItem::new("ab"), Err(ItemError::NotSingleGrapheme { graphemes: 2, .. })));
	}

	#[rstest]
	#[case("😀", false)]
	#[case("👍🏽", true)]
	#[case("👨\u{200D}👩\u{200D}👧", true)]
	#[case("🇺🇸", false)]
	fn complexity(#[case] text: &str, #[case] complex: bool) {
		assert_eq!(SymbolItem::new(text).unwrap().is_complex(), complex);
	}
}
