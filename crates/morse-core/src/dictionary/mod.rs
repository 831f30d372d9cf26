//! The bidirectional symbol table that drives translation.
//!
//! A [`Dictionary`] holds two independent mappings:
//!
//! - `to`:   character → Morse token (used when encoding text)
//! - `from`: Morse token → character (used when decoding Morse)
//!
//! The two mappings are loaded as-is from the dictionary file.  They are not
//! derived from each other, so an alphabet may deliberately be asymmetric
//! (for example, accept an alternate token when decoding that is never
//! produced when encoding).
//!
//! Once built, a dictionary is never mutated.  It is plain owned data and is
//! therefore `Send + Sync`, safe to share between readers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub mod loader;

/// JSON source of the bundled Latin alphabet (letters, digits and the common
/// ITU punctuation marks).
pub const LATIN_JSON: &str = include_str!("../../dictionaries/latin.json");

/// Errors that can occur while building a [`Dictionary`].
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// No dictionary path was supplied.
    #[error("dictionary path cannot be empty")]
    EmptyPath,

    /// The dictionary file could not be read.
    #[error("failed to read dictionary file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a `{ "to": {...}, "from": {...} }` document.
    ///
    /// `path` is `None` when the JSON did not come from a file.
    #[error("dictionary is not in the expected format: {source}")]
    Format {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

/// Character ↔ Morse token lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dictionary {
    to: HashMap<char, String>,
    from: HashMap<String, char>,
}

impl Dictionary {
    /// Builds a dictionary from already-assembled tables.
    pub fn new(to: HashMap<char, String>, from: HashMap<String, char>) -> Self {
        Self { to, from }
    }

    /// Reads and parses the dictionary file at `path`.
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::EmptyPath`] if `path` is empty.
    /// - [`DictionaryError::Load`] if the file cannot be read.
    /// - [`DictionaryError::Format`] if the content has the wrong shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        loader::load_file(path.as_ref())
    }

    /// Parses a dictionary from JSON text.
    ///
    /// Both `to` and `from` are required, no other top-level field is
    /// accepted, and every character key or value must be exactly one
    /// character long.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Format`] (with `path: None`) on any shape
    /// mismatch.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str(json).map_err(|source| DictionaryError::Format { path: None, source })
    }

    /// Returns the bundled Latin alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Format`] only if the embedded JSON is
    /// corrupt, which the test suite rules out.
    pub fn latin() -> Result<Self, DictionaryError> {
        Self::from_json_str(LATIN_JSON)
    }

    /// Returns the Morse token for `c`, if the alphabet has one.
    pub fn token_for(&self, c: char) -> Option<&str> {
        self.to.get(&c).map(String::as_str)
    }

    /// Returns the character a Morse `token` decodes to, if any.
    pub fn char_for(&self, token: &str) -> Option<char> {
        self.from.get(token).copied()
    }

    /// Number of encodable characters (entries in the `to` table).
    pub fn len(&self) -> usize {
        self.to.len()
    }

    /// Returns `true` if neither table has any entry.
    pub fn is_empty(&self) -> bool {
        self.to.is_empty() && self.from.is_empty()
    }

    /// Number of decodable tokens (entries in the `from` table).
    pub fn token_count(&self) -> usize {
        self.from.len()
    }

    /// Iterates over every encodable character and its token.
    pub fn encodable(&self) -> impl Iterator<Item = (char, &str)> {
        self.to.iter().map(|(c, token)| (*c, token.as_str()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
