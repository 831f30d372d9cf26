//! One `morse` invocation: choose a dictionary, validate the request, translate.
//!
//! The runner never prints.  It returns an [`Outcome`] and leaves output and
//! exit codes to `main`.  Only a dictionary that cannot be loaded is an error;
//! a missing argument or a failed translation is an ordinary outcome that is
//! reported to the user.

use std::path::{Path, PathBuf};

use morse_core::{
    BundledDictionary, DictionaryError, DictionaryFile, DictionarySource, Direction,
    MorseTranslator, TranslationError,
};
use tracing::{debug, info};

/// Shown when `--text` is missing or empty.
pub const MISSING_TEXT_MESSAGE: &str = "Please provide text to translate using the --text flag";

/// Shown when no mode was given on the command line or in the config file.
pub const MISSING_MODE_MESSAGE: &str = "Please provide a valid mode";

/// Result of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The complete translation.
    Translated(String),
    /// The translator rejected the input.
    Failed(TranslationError),
    /// The request was incomplete; the message tells the user what to add.
    Usage(&'static str),
}

/// Picks the dictionary source: an explicit path wins, then the config file,
/// then the bundled Latin alphabet.
pub fn select_source(
    flag: Option<&Path>,
    configured: Option<&Path>,
) -> Box<dyn DictionarySource> {
    match flag.or(configured) {
        Some(path) => Box::new(DictionaryFile::new(PathBuf::from(path))),
        None => Box::new(BundledDictionary),
    }
}

/// Loads the translator from `source`.
///
/// # Errors
///
/// Returns the source's [`DictionaryError`].
pub fn open_translator(source: &dyn DictionarySource) -> Result<MorseTranslator, DictionaryError> {
    let description = source.describe();
    let translator = MorseTranslator::from_source(source)?;
    info!(
        "using dictionary {description} ({} characters)",
        translator.dictionary().len()
    );
    Ok(translator)
}

/// Runs one request against an already-loaded translator.
///
/// Text is checked before mode, so a call with neither asks for the text first.
pub fn run(translator: &MorseTranslator, text: Option<&str>, mode: Option<Direction>) -> Outcome {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Outcome::Usage(MISSING_TEXT_MESSAGE),
    };

    let Some(direction) = mode else {
        return Outcome::Usage(MISSING_MODE_MESSAGE);
    };

    match translator.translate(direction, text) {
        Ok(output) => Outcome::Translated(output),
        Err(e) => {
            debug!("translation {direction} failed: {e}");
            Outcome::Failed(e)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
