//! Morse syntax validation.
//!
//! Decoding only starts once the whole input has been checked against the
//! grammar below, so the decoder never has to deal with stray symbols:
//!
//! ```text
//! morse  := token ( gap token )*
//! token  := ( "." | "-" )+
//! gap    := " "+
//! ```
//!
//! The input is expected to be trimmed already; leading or trailing spaces
//! are rejected.

use std::sync::OnceLock;

use regex::Regex;

fn morse_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[.-]+( +[.-]+)*$").expect("Morse pattern is a valid regex"))
}

/// Returns `true` if `input` is one or more dot/dash tokens separated by runs
/// of spaces, with nothing else before, between, or after them.
pub fn is_valid_morse(input: &str) -> bool {
    morse_pattern().is_match(input)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
