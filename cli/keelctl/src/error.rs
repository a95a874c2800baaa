//! Error handling and display for the CLI.

use colored::Colorize;
use keel_base::GuidError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}' is not a valid GUID: {source}")]
    InvalidGuid {
        input: String,
        #[source]
        source: GuidError,
    },

    #[error("Unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
}

impl CliError {
    pub fn invalid_guid(input: impl Into<String>, source: GuidError) -> Self {
        Self::InvalidGuid {
            input: input.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(CliError::InvalidGuid { source, .. }) = err.downcast_ref::<CliError>() {
        if source.is_character_error() {
            eprintln!(
                "\n{}",
                "Hint: GUIDs use uppercase hex digits in 8-4-4-4-12 groups.".yellow()
            );
        } else if source.is_length_error() {
            eprintln!(
                "\n{}",
                "Hint: GUIDs are exactly 36 characters, with no surrounding whitespace.".yellow()
            );
        }
    }
}
