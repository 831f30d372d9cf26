//! Morse → text decoder.
//!
//! The decoder is a single left-to-right pass over the trimmed input driven by
//! a two-state machine:
//!
//! ```text
//!                 space, buffer empty
//!  Accumulating ─────────────────────────▶ BoundaryPending
//!       ▲                                       │
//!       └──────── '.' or '-' (emit ' ') ────────┘
//! ```
//!
//! - A space that ends a non-empty token flushes the token through the `from`
//!   table and stays in `Accumulating`.
//! - A further space (the token buffer is already empty) means the gap is a
//!   word gap, so a word boundary is pending.
//! - The next symbol emits exactly one space before starting a new token.
//!   Gaps of 2, 3 or 30 spaces therefore all collapse to one space.
//! - At the end of input a non-empty buffer is flushed.

use tracing::debug;

use super::validate::is_valid_morse;
use super::TranslationError;
use crate::dictionary::Dictionary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Accumulating,
    BoundaryPending,
}

/// Decodes `input` into text using the `from` table of `dictionary`.
///
/// # Errors
///
/// - [`TranslationError::EmptyInput`] if `input` is empty.
/// - [`TranslationError::InvalidMorseSyntax`] if the trimmed input is not
///   dot/dash tokens separated by spaces (including whitespace-only input).
/// - [`TranslationError::TokenNotFound`] for the first token with no
///   character.  Nothing is returned for the tokens decoded before it.
pub fn decode(dictionary: &Dictionary, input: &str) -> Result<String, TranslationError> {
    if input.is_empty() {
        return Err(TranslationError::EmptyInput);
    }

    let trimmed = input.trim();
    if !is_valid_morse(trimmed) {
        return Err(TranslationError::InvalidMorseSyntax);
    }

    let mut output = String::with_capacity(trimmed.len() / 2 + 1);
    let mut token = String::new();
    let mut state = DecodeState::Accumulating;

    for symbol in trimmed.chars() {
        if symbol == ' ' {
            if token.is_empty() {
                state = DecodeState::BoundaryPending;
            } else {
                output.push(lookup(dictionary, &token)?);
                token.clear();
            }
            continue;
        }

        if state == DecodeState::BoundaryPending {
            output.push(' ');
            state = DecodeState::Accumulating;
        }
        token.push(symbol);
    }

    if !token.is_empty() {
        output.push(lookup(dictionary, &token)?);
    }

    Ok(output)
}

fn lookup(dictionary: &Dictionary, token: &str) -> Result<char, TranslationError> {
    dictionary.char_for(token).ok_or_else(|| {
        debug!("no character for Morse token {token:?}");
        TranslationError::TokenNotFound(token.to_string())
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
