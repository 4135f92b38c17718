//! Parsing and validation of catalog definition documents.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glyphgrid_primitives::{SymbolItem, Token};
use serde::Deserialize;
use tracing::warn;

/// Catalog document that ships with the crate.
pub const DEFAULT_CATALOG: &str = include_str!("../assets/catalog.toml");

const MAX_PROBLEMS: usize = 50;

/// The catalog definitions could not be used.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("catalog source is not valid TOML: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("catalog source defines no usable emoji or symbol")]
	Empty,

	#[error("failed to read catalog source {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// One base emoji definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiDef {
	pub item: SymbolItem,
	/// Alias tokens. The first one is canonical for reverse lookup.
	pub aliases: Vec<Token>,
	pub category: Arc<str>,
	pub rank: i32,
}

/// One symbol override definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDef {
	pub token: Token,
	pub item: SymbolItem,
	/// Category the symbol is listed under. `None` only overrides the shortcode.
	pub category: Option<Arc<str>>,
	pub rank: i32,
}

/// Classification of a definition dropped during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceProblemKind {
	InvalidCodepoints,
	InvalidItem,
	InvalidToken,
	MissingAliases,
}

/// A definition that was skipped or partially applied.
#[derive(Debug, Clone)]
pub struct SourceProblem {
	pub kind: SourceProblemKind,
	/// Offending raw value.
	pub value: Arc<str>,
	pub message: Arc<str>,
}

/// Validated static catalog definitions.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
	pub emojis: Vec<EmojiDef>,
	pub symbols: Vec<SymbolDef>,
	pub(crate) problems: Vec<SourceProblem>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSource {
	#[serde(default)]
	emoji: Vec<RawEmoji>,
	#[serde(default)]
	symbol: Vec<RawSymbol>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEmoji {
	codepoints: String,
	aliases: Vec<String>,
	category: String,
	#[serde(default)]
	rank: i32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSymbol {
	token: String,
	symbol: String,
	category: Option<String>,
	#[serde(default)]
	rank: i32,
}

impl CatalogSource {
	/// Parses a TOML catalog document.
	///
	/// Individual bad definitions are dropped and reported through [`problems`](Self::problems);
	/// only unparseable or empty documents are errors.
	pub fn from_toml_str(text: &str) -> Result<Self, SourceError> {
		let raw: RawSource = toml::from_str(text)?;
		let mut source = Self::default();

		for def in raw.emoji {
			source.push_emoji(def);
		}
		for def in raw.symbol {
			source.push_symbol(def);
		}

		if source.emojis.is_empty() && source.symbols.is_empty() {
			return Err(SourceError::Empty);
		}

		if !source.problems.is_empty() {
			let samples: Vec<_> = source.problems.iter().take(5).collect();
			warn!(count = source.problems.len(), ?samples, "Catalog source problems");
		}

		Ok(source)
	}

	/// Reads and parses a catalog document from disk.
	pub fn from_path(path: &Path) -> Result<Self, SourceError> {
		let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&text)
	}

	/// Parses `text`, degrading to [`CatalogSource::fallback`] when it is unusable.
	pub fn load_or_fallback(text: &str) -> (Self, Option<SourceError>) {
		match Self::from_toml_str(text) {
			Ok(source) => (source, None),
			Err(error) => {
				warn!(%error, "Catalog source rejected, using fallback symbol set");
				(Self::fallback(), Some(error))
			}
		}
	}

	/// The embedded default catalog.
	pub fn builtin() -> Self {
		Self::load_or_fallback(DEFAULT_CATALOG).0
	}

	/// Definitions dropped while validating, capped at 50.
	pub fn problems(&self) -> &[SourceProblem] {
		&self.problems
	}

	pub fn is_empty(&self) -> bool {
		self.emojis.is_empty() && self.symbols.is_empty()
	}

	fn push_emoji(&mut self, raw: RawEmoji) {
		let item = match parse_codepoints(&raw.codepoints) {
			Ok(chars) => match SymbolItem::from_chars(&chars) {
				Ok(item) => item,
				Err(error) => {
					self.push_problem(SourceProblemKind::InvalidItem, &raw.codepoints, &error.to_string());
					return;
				}
			},
			Err(message) => {
				self.push_problem(SourceProblemKind::InvalidCodepoints, &raw.codepoints, &message);
				return;
			}
		};

		let mut aliases = Vec::with_capacity(raw.aliases.len());
		for alias in &raw.aliases {
			match Token::parse(alias) {
				Ok(token) => aliases.push(token),
				Err(error) => self.push_problem(SourceProblemKind::InvalidToken, alias, &error.to_string()),
			}
		}
		if aliases.is_empty() {
			self.push_problem(SourceProblemKind::MissingAliases, &raw.codepoints, "emoji has no valid alias, listed without shortcode");
		}

		self.emojis.push(EmojiDef {
			item,
			aliases,
			category: Arc::from(raw.category.as_str()),
			rank: raw.rank,
		});
	}

	fn push_symbol(&mut self, raw: RawSymbol) {
		let token = match Token::parse(&raw.token) {
			Ok(token) => token,
			Err(error) => {
				self.push_problem(SourceProblemKind::InvalidToken, &raw.token, &error.to_string());
				return;
			}
		};
		let item = match SymbolItem::new(&raw.symbol) {
			Ok(item) => item,
			Err(error) => {
				self.push_problem(SourceProblemKind::InvalidItem, &raw.symbol, &error.to_string());
				return;
			}
		};
		self.symbols.push(SymbolDef {
			token,
			item,
			category: raw.category.as_deref().map(Arc::from),
			rank: raw.rank,
		});
	}

	fn push_problem(&mut self, kind: SourceProblemKind, value: &str, message: &str) {
		if self.problems.len() < MAX_PROBLEMS {
			self.problems.push(SourceProblem {
				kind,
				value: Arc::from(value),
				message: Arc::from(message),
			});
		}
	}
}

/// Parses `"1F1FA 1F1F8"` style hex codepoint lists.
///
/// Separators may be spaces, `-` or `,`; an optional `U+` prefix is accepted.
pub fn parse_codepoints(text: &str) -> Result<Vec<char>, String> {
	let chars: Vec<char> = text
		.split(|c: char| c.is_whitespace() || c == '-' || c == ',')
		.filter(|part| !part.is_empty())
		.map(|part| {
			let hex = part.strip_prefix("U+").or_else(|| part.strip_prefix("u+")).unwrap_or(part);
			u32::from_str_radix(hex, 16)
				.ok()
				.and_then(char::from_u32)
				.ok_or_else(|| format!("invalid codepoint {part:?}"))
		})
		.collect::<Result<_, _>>()?;

	if chars.is_empty() {
		return Err("empty codepoint sequence".to_string());
	}
	Ok(chars)
}
