//! morse-cli library crate.
//!
//! Everything the `morse` binary does apart from parsing arguments and
//! printing lives here so it can be unit-tested without spawning a process.
//!
//! ```text
//! main.rs   clap arguments, logging setup, printing, exit codes
//!    │
//!    ├── config   TOML configuration file (default dictionary, mode, log level)
//!    └── runner   picks the dictionary source and runs one translation
//!    │
//! morse-core   dictionary + encoder/decoder
//! ```

/// Configuration file loading.
pub mod config;

/// Dictionary selection and single-request execution.
pub mod runner;
