//! Configuration for the CLI.
//!
//! Everything comes from environment variables; command-line flags override
//! the output and log format afterwards.

use anyhow::{bail, Result};

use crate::output::OutputFormat;

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_level: String,

    pub log_format: LogFormat,

    /// Format for command output on stdout.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = lookup("KEEL_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match lookup("KEEL_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("KEEL_LOG_FORMAT must be 'text' or 'json', got '{}'", other),
        };

        let output = match lookup("KEEL_OUTPUT") {
            None => defaults.output,
            Some(value) => value.parse()?,
        };

        Ok(Self {
            log_level,
            log_format,
            output,
        })
    }
}
