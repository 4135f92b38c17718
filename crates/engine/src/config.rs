//! Engine configuration.

use std::path::{Path, PathBuf};

use glyphgrid_primitives::{KeyLayout, Modifier};
use serde::Deserialize;

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid configuration: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("suggestion_limit must be at least 1")]
	ZeroSuggestionLimit,
}

/// Engine settings, read from a TOML file.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
	/// Catalog definitions; the embedded catalog when absent.
	pub catalog_path: Option<PathBuf>,
	/// Persistent state file; state lives in memory when absent.
	pub store_path: Option<PathBuf>,
	/// Maximum number of completion candidates.
	pub suggestion_limit: usize,
	/// Cap on usage records, unbounded when absent.
	pub ledger_capacity: Option<usize>,
	pub key_layout: KeyLayout,
	/// Modifier held with a digit to recall a recent item in the picker.
	pub quick_recall_modifier: Modifier,
	/// Replace a completed `:token:` as soon as the closing colon is typed.
	pub auto_replace_closed: bool,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			catalog_path: None,
			store_path: None,
			suggestion_limit: 5,
			ledger_capacity: None,
			key_layout: KeyLayout::default(),
			quick_recall_modifier: Modifier::default(),
			auto_replace_closed: true,
		}
	}
}

impl EngineConfig {
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(text)?;
		if config.suggestion_limit == 0 {
			return Err(ConfigError::ZeroSuggestionLimit);
		}
		Ok(config)
	}

	/// Reads the configuration at `path`. Relative catalog and store paths
	/// resolve against the file's directory.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let mut config = Self::from_toml_str(&text)?;
		if let Some(base) = path.parent() {
			for slot in [&mut config.catalog_path, &mut config.store_path] {
				if let Some(p) = slot
					&& p.is_relative()
				{
					*p = base.join(&*p);
				}
			}
		}
		Ok(config)
	}
}
