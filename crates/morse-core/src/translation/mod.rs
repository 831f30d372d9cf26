//! Translation between text and Morse code.
//!
//! [`MorseTranslator`] owns a [`Dictionary`] and exposes the two directions:
//!
//! - [`MorseTranslator::to_morse`]   – text → Morse (see [`encoder`])
//! - [`MorseTranslator::from_morse`] – Morse → text (see [`decoder`], guarded
//!   by [`validate`])
//!
//! Each call is a single pass over its input and either returns the complete
//! translation or an error.  There are no partial results.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::dictionary::loader::DictionarySource;
use crate::dictionary::{Dictionary, DictionaryError};

pub mod decoder;
pub mod encoder;
pub mod validate;

/// Written between two tokens of the same word.
pub const LETTER_SEPARATOR: char = ' ';

/// Written for every space in the text being encoded.
pub const WORD_SEPARATOR: &str = "  ";

/// Errors returned by a single translation call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The input string was empty.
    #[error("input cannot be empty")]
    EmptyInput,

    /// The decoder input is not dot/dash tokens separated by spaces.
    #[error("input is not a valid morse code")]
    InvalidMorseSyntax,

    /// The encoder met a character with no token in the dictionary.
    #[error("character '{0}' cannot be translated: it is not present in the dictionary")]
    CharacterNotFound(char),

    /// The decoder met a token with no character in the dictionary.
    #[error("token '{0}' cannot be translated: it is not present in the dictionary")]
    TokenNotFound(String),
}

/// Returned when a translation mode string is neither `to` nor `from`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown translation mode {0:?}: expected \"to\" or \"from\"")]
pub struct ParseDirectionError(pub String);

/// Which way a translation goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Text → Morse.
    ToMorse,
    /// Morse → text.
    FromMorse,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses `"to"` or `"from"`, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "to" => Ok(Self::ToMorse),
            "from" => Ok(Self::FromMorse),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToMorse => f.write_str("to"),
            Self::FromMorse => f.write_str("from"),
        }
    }
}

/// Dictionary-backed Morse translator.
///
/// # Example
///
/// ```rust
/// use morse_core::MorseTranslator;
///
/// let translator = MorseTranslator::latin().unwrap();
/// assert_eq!(translator.to_morse("SOS").unwrap(), "... --- ...");
/// assert_eq!(translator.from_morse("... --- ...").unwrap(), "SOS");
/// ```
#[derive(Debug, Clone)]
pub struct MorseTranslator {
    dictionary: Dictionary,
}

impl MorseTranslator {
    /// Creates a translator from the dictionary file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if the path is empty, unreadable, or the
    /// file is not a valid dictionary.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        Ok(Self::with_dictionary(Dictionary::load(path)?))
    }

    /// Creates a translator from any [`DictionarySource`].
    ///
    /// # Errors
    ///
    /// Propagates the source's [`DictionaryError`].
    pub fn from_source<S>(source: &S) -> Result<Self, DictionaryError>
    where
        S: DictionarySource + ?Sized,
    {
        Ok(Self::with_dictionary(source.load()?))
    }

    /// Creates a translator using the bundled Latin alphabet.
    ///
    /// # Errors
    ///
    /// See [`Dictionary::latin`].
    pub fn latin() -> Result<Self, DictionaryError> {
        Ok(Self::with_dictionary(Dictionary::latin()?))
    }

    /// Wraps an already-built dictionary.
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// The dictionary driving this translator.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Encodes text into Morse.  See [`encoder::encode`].
    ///
    /// # Errors
    ///
    /// [`TranslationError::EmptyInput`] or [`TranslationError::CharacterNotFound`].
    pub fn to_morse(&self, input: &str) -> Result<String, TranslationError> {
        trace!("encoding {} bytes", input.len());
        encoder::encode(&self.dictionary, input)
    }

    /// Decodes Morse into text.  See [`decoder::decode`].
    ///
    /// # Errors
    ///
    /// [`TranslationError::EmptyInput`], [`TranslationError::InvalidMorseSyntax`]
    /// or [`TranslationError::TokenNotFound`].
    pub fn from_morse(&self, input: &str) -> Result<String, TranslationError> {
        trace!("decoding {} bytes", input.len());
        decoder::decode(&self.dictionary, input)
    }

    /// Translates `input` in the given direction.
    ///
    /// # Errors
    ///
    /// Same as [`Self::to_morse`] / [`Self::from_morse`].
    pub fn translate(&self, direction: Direction, input: &str) -> Result<String, TranslationError> {
        match direction {
            Direction::ToMorse => self.to_morse(input),
            Direction::FromMorse => self.from_morse(input),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
