//! Durable key-value storage behind the favorites, usage and custom-entry records.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Persistence failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("store I/O on {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("record {key:?} is not valid JSON: {source}")]
	Json {
		key: String,
		#[source]
		source: serde_json::Error,
	},
}

/// String key-value store.
///
/// A `put` must be visible to every later `get` of the same key on the same store.
pub trait KvStore: Send + Sync {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
	fn put(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Reads and deserializes a JSON record.
pub fn load_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<T>, StoreError> {
	let Some(text) = store.get(key)? else {
		return Ok(None);
	};
	serde_json::from_str(&text).map(Some).map_err(|source| StoreError::Json {
		key: key.to_string(),
		source,
	})
}

/// Serializes and writes a JSON record.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KvStore, key: &str, value: &T) -> Result<(), StoreError> {
	let text = serde_json::to_string(value).map_err(|source| StoreError::Json {
		key: key.to_string(),
		source,
	})?;
	store.put(key, text)
}

/// Loads a record, treating unreadable data as absent.
pub(crate) fn load_or_default<T: DeserializeOwned + Default>(store: &dyn KvStore, key: &str) -> T {
	match load_json(store, key) {
		Ok(value) => value.unwrap_or_default(),
		Err(error) => {
			warn!(key, %error, "Discarding unreadable record");
			T::default()
		}
	}
}

/// Writes a record, logging instead of propagating failure.
pub(crate) fn persist<T: Serialize + ?Sized>(store: &dyn KvStore, key: &str, value: &T) {
	if let Err(error) = save_json(store, key, value) {
		warn!(key, %error, "Failed to persist record");
	}
}

/// Volatile store, for tests and sessions without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl KvStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.entries.lock().get(key).cloned())
	}

	fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
		self.entries.lock().insert(key.to_string(), value);
		Ok(())
	}
}

/// Store backed by one JSON document on disk.
///
/// Every `put` rewrites the document through a temporary sibling file and a
/// rename, so a crash leaves either the old or the new document.
#[derive(Debug)]
pub struct FileStore {
	path: PathBuf,
	entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
	/// Opens `path`, starting empty when it does not exist yet.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();
		let entries = match std::fs::read_to_string(&path) {
			Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Json {
				key: path.display().to_string(),
				source,
			})?,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
			Err(source) => return Err(StoreError::Io { path, source }),
		};
		debug!(path = %path.display(), keys = entries.len(), "Opened file store");
		Ok(Self {
			path,
			entries: Mutex::new(entries),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn write_document(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
		let io_err = |source: std::io::Error| StoreError::Io {
			path: self.path.clone(),
			source,
		};
		let text = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Json {
			key: self.path.display().to_string(),
			source,
		})?;

		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			std::fs::create_dir_all(parent).map_err(io_err)?;
		}

		let tmp = self.path.with_extension("tmp");
		let mut file = std::fs::File::create(&tmp).map_err(io_err)?;
		file.write_all(text.as_bytes()).map_err(io_err)?;
		file.sync_all().map_err(io_err)?;
		std::fs::rename(&tmp, &self.path).map_err(io_err)
	}
}

impl KvStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.entries.lock().get(key).cloned())
	}

	fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
		let mut entries = self.entries.lock();
		entries.insert(key.to_string(), value);
		self.write_document(&entries)
	}
}
