//! GUID commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use keel_base::Guid;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CliError;
use crate::output::{print_lines, print_success, print_view, Field, OutputFormat};

use super::CommandContext;

/// GUID commands.
#[derive(Debug, Args)]
pub struct GuidCommand {
    #[command(subcommand)]
    command: GuidSubcommand,
}

#[derive(Debug, Subcommand)]
enum GuidSubcommand {
    /// Generate random GUIDs.
    New(NewArgs),

    /// Check whether text is a canonical GUID (exit code 1 if not).
    Check(TextArg),

    /// Decode a GUID and show its raw words.
    Inspect(TextArg),

    /// Decode leniently; malformed text yields the nil GUID.
    Lossy(TextArg),
}

#[derive(Debug, Args)]
struct NewArgs {
    /// Number of GUIDs to generate.
    #[arg(long, short = 'n', default_value = "1")]
    count: usize,
}

#[derive(Debug, Args)]
struct TextArg {
    /// GUID text, e.g. 01234567-89AB-CDEF-FEDC-BA9876543210.
    text: String,
}

impl GuidCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            GuidSubcommand::New(args) => new_guids(ctx, args),
            GuidSubcommand::Check(args) => check(ctx, args),
            GuidSubcommand::Inspect(args) => inspect(ctx, args),
            GuidSubcommand::Lossy(args) => lossy(ctx, args),
        }
    }
}

#[derive(Debug, Serialize)]
struct GuidView {
    guid: Guid,
    high: String,
    low: String,
    nil: bool,
}

impl GuidView {
    fn new(guid: Guid) -> Self {
        Self {
            guid,
            high: format!("{:#018X}", guid.high()),
            low: format!("{:#018X}", guid.low()),
            nil: guid.is_nil(),
        }
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("guid", self.guid.to_string()),
            Field::new("high", self.high.clone()),
            Field::new("low", self.low.clone()),
            Field::new("nil", self.nil.to_string()),
        ]
    }
}

fn new_guids(ctx: CommandContext, args: NewArgs) -> Result<()> {
    debug!(count = args.count, "generating GUIDs");

    let guids = (0..args.count)
        .map(|_| Guid::generate())
        .collect::<Result<Vec<_>, _>>()?;

    print_lines(&guids, ctx.format);
    Ok(())
}

fn check(ctx: CommandContext, args: TextArg) -> Result<()> {
    debug!(text = %args.text, "checking GUID");

    let err = match Guid::parse(&args.text) {
        Ok(_) => {
            match ctx.format {
                OutputFormat::Json => {
                    print_view(&[], &serde_json::json!({ "valid": true }), ctx.format)
                }
                OutputFormat::Text => print_success(&format!("{} is a valid GUID", args.text)),
            }
            return Ok(());
        }
        Err(err) => err,
    };

    warn!(text = %args.text, error = %err, "invalid GUID");
    if ctx.format == OutputFormat::Json {
        print_view(
            &[],
            &serde_json::json!({ "valid": false, "reason": err.to_string() }),
            ctx.format,
        );
    }
    Err(CliError::invalid_guid(args.text, err).into())
}

fn inspect(ctx: CommandContext, args: TextArg) -> Result<()> {
    let guid = Guid::parse(&args.text).map_err(|e| CliError::invalid_guid(&args.text, e))?;
    debug!(%guid, "decoded GUID");

    let view = GuidView::new(guid);
    print_view(&view.fields(), &view, ctx.format);
    Ok(())
}

fn lossy(ctx: CommandContext, args: TextArg) -> Result<()> {
    let view = lossy_view(&args.text);
    print_view(&view.fields(), &view, ctx.format);
    Ok(())
}

fn lossy_view(text: &str) -> GuidView {
    let guid = Guid::from_str_lossy(text);
    if guid.is_nil() && !Guid::is_valid(text) {
        warn!(text = %text, "malformed GUID decoded as nil");
    }
    GuidView::new(guid)
}
