//! Output formatting for CLI commands.

use std::str::FromStr;

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliError;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text and tables.
    #[default]
    Text,
    /// JSON format.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

/// A labelled value, one row of a key/value table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct Field {
    #[tabled(rename = "FIELD")]
    pub name: &'static str,
    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl Field {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Print a key/value view, as a table or as the serialized JSON object.
pub fn print_view<T: Serialize>(fields: &[Field], json: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", Table::new(fields)),
        OutputFormat::Json => println!("{}", format_json(json)),
    }
}

/// Print a list of plain lines, or a JSON array of them.
pub fn print_lines(lines: &[String], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for line in lines {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", format_json(&lines)),
    }
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}
