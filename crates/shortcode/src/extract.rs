//! Detection of a `:token` being typed right before the cursor.

use glyphgrid_primitives::is_token_char;

/// Longest in-progress token considered a shortcode.
pub const MAX_TOKEN_CHARS: usize = 30;

/// A shortcode candidate found at the end of the text before the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction<'a> {
	/// Token text as typed, without colons. Not case-folded.
	pub token: &'a str,
	/// Byte offset of the opening colon.
	pub start: usize,
	delete_chars: usize,
}

impl Extraction<'_> {
	/// Characters the caller deletes before the cursor, opening colon included.
	pub fn delete_chars(&self) -> usize {
		self.delete_chars
	}
}

/// Finds an in-progress `:token` at the end of `text`.
///
/// Returns `None` when there is no colon, or the text after the last colon is
/// empty, longer than [`MAX_TOKEN_CHARS`], or contains anything outside
/// `[A-Za-z0-9_]` (so `"time: 5pm"` is not a shortcode).
pub fn extract(text: &str) -> Option<Extraction<'_>> {
	let start = text.rfind(':')?;
	let token = &text[start + 1..];
	if token.is_empty() || token.len() > MAX_TOKEN_CHARS || !token.chars().all(is_token_char) {
		return None;
	}
	Some(Extraction {
		token,
		start,
		delete_chars: token.len() + 1,
	})
}

/// Finds a completed `:token:` at the end of `text`.
///
/// The closing colon is part of the deleted span.
pub fn extract_closed(text: &str) -> Option<Extraction<'_>> {
	let open = text.strip_suffix(':')?;
	let found = extract(open)?;
	Some(Extraction {
		delete_chars: found.delete_chars + 1,
		..found
	})
}
