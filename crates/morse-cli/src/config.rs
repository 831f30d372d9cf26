//! TOML-based configuration for the `morse` command.
//!
//! The config file is optional.  It is read from `--config` / `MORSE_CONFIG`
//! when given, otherwise from the platform-appropriate location:
//! - Windows:  `%APPDATA%\Morse\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/morse/config.toml` or `~/.config/morse/config.toml`
//! - macOS:    `~/Library/Application Support/Morse/config.toml`
//!
//! ```toml
//! [translator]
//! dictionary = "/usr/share/morse/latin.json"
//! default_mode = "to"
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! Every field has a default, so an empty file (or no file at all) is valid.
//! Command-line flags always take precedence over values read here.

use std::path::{Path, PathBuf};

use morse_core::{Direction, ParseDirectionError};
use serde::Deserialize;
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// `translator.default_mode` is neither `to` nor `from`.
    #[error("invalid translator.default_mode: {0}")]
    InvalidMode(#[from] ParseDirectionError),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CliConfig {
    #[serde(default)]
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Translation defaults used when the matching flag is absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TranslatorConfig {
    /// Dictionary file.  When absent the bundled Latin alphabet is used.
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
    /// `"to"` or `"from"`.
    #[serde(default)]
    pub default_mode: Option<String>,
}

impl TranslatorConfig {
    /// Parses `default_mode`, if set.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDirectionError`] if the value is not `to` or `from`.
    pub fn default_direction(&self) -> Result<Option<Direction>, ParseDirectionError> {
        self.default_mode.as_deref().map(str::parse).transpose()
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Resolves the platform config file path.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads the configuration.
///
/// With `explicit` set, that file must exist.  Without it, the platform file
/// is used and a missing file (or an undeterminable config directory) yields
/// [`CliConfig::default()`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for unreadable files, [`ConfigError::Parse`] for
/// malformed TOML and [`ConfigError::InvalidMode`] for a bad `default_mode`.
pub fn load_config(explicit: Option<&Path>) -> Result<CliConfig, ConfigError> {
    match explicit {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&content)
        }
        None => config_file_path()
            .map_or_else(|_| Ok(CliConfig::default()), |path| load_config_or_default(&path)),
    }
}

/// Loads `path`, returning defaults if the file does not exist.
///
/// # Errors
///
/// Same as [`load_config`], except that "not found" is not an error.
pub fn load_config_or_default(path: &Path) -> Result<CliConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CliConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_config(content: &str) -> Result<CliConfig, ConfigError> {
    let cfg: CliConfig = toml::from_str(content)?;
    cfg.translator.default_direction()?;
    Ok(cfg)
}

/// Resolves the platform config base directory including the `morse` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Morse"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("morse"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Morse")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
