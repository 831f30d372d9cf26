//! # morse-core
//!
//! Dictionary-driven translation between plain text and Morse code.
//!
//! This crate is used by the `morse` command-line front end.  Apart from
//! reading a dictionary file, it has zero dependencies on the OS, terminal,
//! or process environment.
//!
//! # Architecture overview (for beginners)
//!
//! Morse code represents each character as a short sequence of dots (`.`) and
//! dashes (`-`), called a *token*.  Letters inside a word are separated by one
//! space; words are separated by a wider gap (two or more spaces).
//!
//! Which character maps to which token is not hardcoded.  It comes from a
//! *dictionary* file with two tables, one for each direction, so the same
//! engine can drive any alphabet the file describes.
//!
//! - **`dictionary`** – The two lookup tables and the loader that reads them
//!   from a JSON file.  A Latin alphabet is bundled into the binary.
//!
//! - **`translation`** – The encoder (text → Morse), the decoder
//!   (Morse → text), the syntax validator that guards the decoder, and the
//!   [`MorseTranslator`] facade that ties them to a dictionary.

pub mod dictionary;
pub mod translation;

// Re-export the most-used types at the crate root so callers can write
// `morse_core::MorseTranslator` instead of `morse_core::translation::MorseTranslator`.
pub use dictionary::loader::{BundledDictionary, DictionaryFile, DictionarySource};
pub use dictionary::{Dictionary, DictionaryError};
pub use translation::validate::is_valid_morse;
pub use translation::{Direction, MorseTranslator, ParseDirectionError, TranslationError};
