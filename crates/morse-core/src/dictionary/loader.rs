//! Dictionary loading from the file system.
//!
//! The loader runs once, when a translator is constructed.  It reads the whole
//! file into memory and deserializes it with `serde_json`; dictionary files
//! are small (one entry per symbol) so there is no streaming.
//!
//! # Testability
//!
//! The [`DictionarySource`] trait lets callers (and tests) decide where a
//! dictionary comes from without touching the translator:
//!
//! - [`DictionaryFile`]      – a JSON file on disk
//! - [`BundledDictionary`]   – the Latin alphabet compiled into the crate

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Dictionary, DictionaryError};

/// Reads and parses the dictionary file at `path`.
///
/// # Errors
///
/// See [`Dictionary::load`].
pub fn load_file(path: &Path) -> Result<Dictionary, DictionaryError> {
    if path.as_os_str().is_empty() {
        return Err(DictionaryError::EmptyPath);
    }

    let content = std::fs::read_to_string(path).map_err(|source| DictionaryError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary: Dictionary =
        serde_json::from_str(&content).map_err(|source| DictionaryError::Format {
            path: Some(path.to_path_buf()),
            source,
        })?;

    debug!(
        "loaded dictionary {}: {} characters, {} tokens",
        path.display(),
        dictionary.len(),
        dictionary.token_count()
    );
    Ok(dictionary)
}

/// Anything that can produce a [`Dictionary`].
pub trait DictionarySource {
    /// Builds the dictionary.
    fn load(&self) -> Result<Dictionary, DictionaryError>;

    /// Human-readable origin, used in log lines and error context.
    fn describe(&self) -> String;
}

/// A dictionary stored as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryFile {
    path: PathBuf,
}

impl DictionaryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionarySource for DictionaryFile {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        load_file(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The Latin alphabet embedded in the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundledDictionary;

impl DictionarySource for BundledDictionary {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        Dictionary::latin()
    }

    fn describe(&self) -> String {
        "bundled Latin alphabet".to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
