//! `morse` — translate text to and from Morse code.
//!
//! # Usage
//!
//! ```text
//! morse [OPTIONS]
//!
//! Options:
//!   -t, --text   <TEXT>   Text to be translated
//!   -m, --mode   <MODE>   Translation mode: 'to' or 'from' Morse code
//!   -d, --dict   <PATH>   Custom dictionary path [default: bundled Latin]
//!       --config <PATH>   Configuration file
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable        | Description                                   |
//! |-----------------|-----------------------------------------------|
//! | `MORSE_DICT`    | Dictionary path, same as `--dict`             |
//! | `MORSE_CONFIG`  | Configuration file, same as `--config`        |
//! | `RUST_LOG`      | Log filter; overrides `logging.level`         |
//!
//! # Exit codes
//!
//! - `0` — translated, or a message explaining what is missing or why the
//!   input could not be translated.
//! - `1` — the configuration or the dictionary could not be loaded.
//! - `2` — invalid arguments (reported by clap).

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use morse_cli::config::load_config;
use morse_cli::runner::{self, Outcome};
use morse_core::{Direction, MorseTranslator};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Translate plain text to and from Morse code using a JSON dictionary.
#[derive(Debug, Parser)]
#[command(name = "morse", version)]
struct Cli {
    /// Text to be translated.
    #[arg(short, long)]
    text: Option<String>,

    /// Custom dictionary path.
    ///
    /// Falls back to `translator.dictionary` in the config file, then to the
    /// bundled Latin alphabet.
    #[arg(short, long, env = "MORSE_DICT")]
    dict: Option<PathBuf>,

    /// Translation mode: 'to' or 'from' Morse code.
    ///
    /// Falls back to `translator.default_mode` in the config file.
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Configuration file.  Defaults to the platform config directory.
    #[arg(long, env = "MORSE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Text → Morse.
    To,
    /// Morse → text.
    From,
}

impl From<Mode> for Direction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::To => Direction::ToMorse,
            Mode::From => Direction::FromMorse,
        }
    }
}

/// Loads the dictionary chosen by flag, config or default.  A failure is
/// reported once, by the error returned from `main`.
fn load_translator(flag: Option<&Path>, configured: Option<&Path>) -> anyhow::Result<MorseTranslator> {
    let source = runner::select_source(flag, configured);
    runner::open_translator(source.as_ref())
        .with_context(|| format!("failed to load dictionary {}", source.describe()))
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    // Logs go to stderr so that stdout carries only the translation.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let translator = load_translator(
        cli.dict.as_deref(),
        config.translator.dictionary.as_deref(),
    )?;

    // Validated when the config was loaded.
    let configured_mode = config.translator.default_direction()?;
    let mode = cli.mode.map(Direction::from).or(configured_mode);

    match runner::run(&translator, cli.text.as_deref(), mode) {
        Outcome::Translated(output) => print!("{output}"),
        Outcome::Failed(e) => print!("{e}"),
        Outcome::Usage(message) => println!("{message}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "morse", "--text", "SOS", "--mode", "to", "--dict", "latin.json",
        ])
        .expect("valid arguments");
        assert_eq!(cli.text.as_deref(), Some("SOS"));
        assert_eq!(cli.mode, Some(Mode::To));
        assert_eq!(cli.dict, Some(PathBuf::from("latin.json")));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from(["morse", "-t", "... --- ...", "-m", "from"])
            .expect("valid arguments");
        assert_eq!(cli.mode.map(Direction::from), Some(Direction::FromMorse));
    }

    #[test]
    fn test_load_translator_failure_names_dictionary_and_cause_once() {
        let err = load_translator(Some(Path::new("fake_path.json")), None).unwrap_err();
        let report = format!("{err:#}");
        assert!(report.starts_with("failed to load dictionary fake_path.json"));
        assert_eq!(report.matches("failed to read dictionary file").count(), 1);
    }

    #[test]
    fn test_load_translator_defaults_to_bundled_latin() {
        let translator = load_translator(None, None).expect("bundled dictionary");
        assert_eq!(translator.to_morse("E").unwrap(), ".");
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["morse", "-t", "SOS", "-m", "sideways"]).is_err());
    }
}
