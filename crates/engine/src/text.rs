//! Host text buffer seam.

/// Text buffer the engine edits at the cursor.
pub trait TextTarget {
	/// Text from the start of the line (or buffer) up to the cursor.
	fn text_before_cursor(&self) -> String;

	/// Deletes `delete_chars` chars immediately before the cursor, then inserts
	/// `insert` at the cursor.
	fn replace_before_cursor(&mut self, delete_chars: usize, insert: &str);
}

/// In-memory [`TextTarget`] with the cursor at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTarget(pub String);

impl TextTarget for StringTarget {
	fn text_before_cursor(&self) -> String {
		self.0.clone()
	}

	fn replace_before_cursor(&mut self, delete_chars: usize, insert: &str) {
		let keep = self.0.chars().count().saturating_sub(delete_chars);
		let cut = self.0.char_indices().nth(keep).map_or(self.0.len(), |(idx, _)| idx);
		self.0.truncate(cut);
		self.0.push_str(insert);
	}
}
