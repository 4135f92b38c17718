//! Shortcode tokens (`smile` in `:smile:`).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reasons a string cannot become a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
	#[error("shortcode token is empty")]
	Empty,
	#[error("shortcode token {token:?} contains {found:?}; only [A-Za-z0-9_] is allowed")]
	InvalidChar { token: String, found: char },
}

/// A lowercase ASCII shortcode identifier matching `[a-z0-9_]+`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(Arc<str>);

impl Token {
	/// Case-folds and validates `raw`.
	pub fn parse(raw: &str) -> Result<Self, TokenError> {
		if raw.is_empty() {
			return Err(TokenError::Empty);
		}
		if let Some(found) = raw.chars().find(|c| !is_token_char(*c)) {
			return Err(TokenError::InvalidChar {
				token: raw.to_string(),
				found,
			});
		}
		Ok(Self(Arc::from(raw.to_ascii_lowercase())))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Token length in bytes (equal to chars, tokens are ASCII).
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Returns true for characters allowed in a shortcode token before case folding.
pub fn is_token_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}

impl fmt::Debug for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Token({})", &*self.0)
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Token {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl std::borrow::Borrow<str> for Token {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl Serialize for Token {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for Token {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		Self::parse(&raw).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn parse_folds_case() {
		assert_eq!(Token::parse("Thumbs_UP").unwrap().as_str(), "thumbs_up");
	}

	#[rstest]
	#[case("", TokenError::Empty)]
	#[case("a-b", TokenError::InvalidChar { token: "a-b".into(), found: '-' })]
	#[case("smile ", TokenError::InvalidChar { token: "smile ".into(), found: ' ' })]
	#[case("café", TokenError::InvalidChar { token: "café".into(), found: 'é' })]
	fn parse_rejects(#[case] raw: &str, #[case] expected: TokenError) {
		assert_eq!(Token::parse(raw), Err(expected));
	}
}
