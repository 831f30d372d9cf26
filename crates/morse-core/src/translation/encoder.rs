//! Text → Morse encoder.
//!
//! Output spacing follows the usual written convention:
//!
//! ```text
//! "HI YOU"  →  ".... ..  -.-- --- ..-"
//!                      ^^ word separator (two spaces)
//!                  ^ letter separator (one space)
//! ```
//!
//! No separator is written after the last token, and a letter separator is
//! never written directly before a word separator.

use tracing::debug;

use super::{TranslationError, LETTER_SEPARATOR, WORD_SEPARATOR};
use crate::dictionary::Dictionary;

/// Encodes `input` into Morse using the `to` table of `dictionary`.
///
/// The input is trimmed and uppercased first, so `"hello"` and `" HELLO "`
/// encode identically.  Uppercasing is one character to one character: a
/// character whose uppercase form is longer (`ß`, `ﬀ`) is looked up as
/// written.  Every space inside the input becomes a word separator of its own.
///
/// # Errors
///
/// - [`TranslationError::EmptyInput`] if `input` is empty.
/// - [`TranslationError::CharacterNotFound`] for the first character that has
///   no token.  Nothing is returned for the characters encoded before it.
pub fn encode(dictionary: &Dictionary, input: &str) -> Result<String, TranslationError> {
    if input.is_empty() {
        return Err(TranslationError::EmptyInput);
    }

    let trimmed = input.trim();
    let mut output = String::with_capacity(trimmed.len() * 5);
    let mut chars = trimmed.chars().map(uppercase).peekable();

    while let Some(c) = chars.next() {
        if c == ' ' {
            output.push_str(WORD_SEPARATOR);
            continue;
        }

        let token = dictionary.token_for(c).ok_or_else(|| {
            debug!("no Morse token for character {c:?}");
            TranslationError::CharacterNotFound(c)
        })?;
        output.push_str(token);

        if matches!(chars.peek(), Some(&next) if next != ' ') {
            output.push(LETTER_SEPARATOR);
        }
    }

    Ok(output)
}

/// Simple uppercase mapping: `c` itself when its uppercase form is not a
/// single character.
fn uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Three-letter alphabet: enough to exercise every spacing rule.
    fn abc() -> Dictionary {
        let to = HashMap::from([
            ('A', ".-".to_string()),
            ('B', "-...".to_string()),
            ('C', "-.-.".to_string()),
        ]);
        let from = to.iter().map(|(c, t)| (t.clone(), *c)).collect();
        Dictionary::new(to, from)
    }

    #[test]
    fn test_encode_empty_input_fails() {
        assert_eq!(encode(&abc(), ""), Err(TranslationError::EmptyInput));
    }

    #[test]
    fn test_encode_single_letter_has_no_separator() {
        assert_eq!(encode(&abc(), "A").unwrap(), ".-");
    }

    #[test]
    fn test_encode_letters_are_joined_by_one_space() {
        assert_eq!(encode(&abc(), "ABC").unwrap(), ".- -... -.-.");
    }

    #[test]
    fn test_encode_words_are_joined_by_two_spaces() {
        assert_eq!(encode(&abc(), "AB C").unwrap(), ".- -...  -.-.");
    }

    #[test]
    fn test_encode_each_inner_space_is_its_own_word_separator() {
        // Two spaces in the text produce two word separators.
        assert_eq!(encode(&abc(), "A  B").unwrap(), ".-    -...");
    }

    #[test]
    fn test_encode_lowercase_is_uppercased() {
        assert_eq!(encode(&abc(), "cab").unwrap(), "-.-. .- -...");
    }

    #[test]
    fn test_encode_surrounding_whitespace_is_trimmed() {
        assert_eq!(encode(&abc(), "  A B\t\n").unwrap(), ".-  -...");
    }

    #[test]
    fn test_encode_whitespace_only_input_encodes_to_empty() {
        // Non-empty input that trims to nothing is not an error.
        assert_eq!(encode(&abc(), "   ").unwrap(), "");
    }

    #[test]
    fn test_encode_unknown_character_fails_without_partial_output() {
        let result = encode(&abc(), "AB£C");
        assert_eq!(result, Err(TranslationError::CharacterNotFound('£')));
    }

    #[test]
    fn test_encode_multi_char_uppercase_keeps_character_as_written() {
        // Arrange: an alphabet with both `ß` and `S`
        let to = HashMap::from([('ß', "...--..".to_string()), ('S', "...".to_string())]);
        let from = to.iter().map(|(c, t)| (t.clone(), *c)).collect();
        let dict = Dictionary::new(to, from);

        // Act / Assert: `ß` uses its own entry instead of becoming "SS"
        assert_eq!(encode(&dict, "ß").unwrap(), "...--..");
        assert_eq!(encode(&dict, "sß").unwrap(), "... ...--..");
    }

    #[test]
    fn test_encode_ligature_is_reported_as_typed() {
        let dict = Dictionary::latin().unwrap();
        assert_eq!(encode(&dict, "ﬀ"), Err(TranslationError::CharacterNotFound('ﬀ')));
        assert_eq!(encode(&dict, "ŉ"), Err(TranslationError::CharacterNotFound('ŉ')));
    }

    #[test]
    fn test_uppercase_is_one_to_one() {
        assert_eq!(uppercase('a'), 'A');
        assert_eq!(uppercase('é'), 'É');
        assert_eq!(uppercase('ß'), 'ß');
        assert_eq!(uppercase('7'), '7');
    }

    #[test]
    fn test_encode_inner_tab_is_looked_up_and_fails() {
        let result = encode(&abc(), "A\tB");
        assert_eq!(result, Err(TranslationError::CharacterNotFound('\t')));
    }
}
