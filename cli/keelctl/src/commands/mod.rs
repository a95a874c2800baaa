//! CLI commands.

mod guid;
mod time;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{Config, LogFormat};
use crate::logging;
use crate::output::OutputFormat;

/// keel CLI - generate and inspect GUIDs and timestamps.
#[derive(Debug, Parser)]
#[command(name = "keel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json).
    #[arg(long, global = true, env = "KEEL_OUTPUT")]
    format: Option<String>,

    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate, validate and decode GUIDs.
    Guid(guid::GuidCommand),

    /// Sample and render timestamps.
    Time(time::TimeCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let mut config = Config::from_env()?;
        if let Some(format) = self.format.as_deref() {
            config.output = format.parse()?;
        }
        if self.log_json {
            config.log_format = LogFormat::Json;
        }

        logging::init(&config);
        tracing::debug!(?config, "configuration loaded");

        let ctx = CommandContext {
            format: config.output,
        };

        match self.command {
            Commands::Guid(cmd) => cmd.run(ctx),
            Commands::Time(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("keel {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_guid_new_with_count() {
        let cli = Cli::try_parse_from(["keel", "guid", "new", "--count", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Guid(_)));
    }

    #[test]
    fn test_parse_negative_micros() {
        let cli =
            Cli::try_parse_from(["keel", "--format", "json", "time", "show", "--", "-1500000"])
                .unwrap();
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(matches!(cli.command, Commands::Time(_)));
    }
}
