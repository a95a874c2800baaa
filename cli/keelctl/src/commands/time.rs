//! Timestamp commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use keel_base::Timestamp;
use serde::Serialize;
use tracing::debug;

use crate::output::{print_view, Field};

use super::CommandContext;

/// Timestamp commands.
#[derive(Debug, Args)]
pub struct TimeCommand {
    #[command(subcommand)]
    command: TimeSubcommand,
}

#[derive(Debug, Subcommand)]
enum TimeSubcommand {
    /// Show the current time.
    Now(RenderArgs),

    /// Render a microsecond count since the Unix epoch.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Leave microseconds out of the calendar form.
    #[arg(long)]
    no_micros: bool,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Microseconds since the epoch; may be negative.
    #[arg(allow_negative_numbers = true)]
    micros: i64,

    #[command(flatten)]
    render: RenderArgs,
}

impl TimeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            TimeSubcommand::Now(args) => {
                let now = Timestamp::now();
                debug!(micros = now.micros(), "sampled wall clock");
                show(ctx, now, &args)
            }
            TimeSubcommand::Show(args) => show(ctx, Timestamp::from_micros(args.micros), &args.render),
        }
    }
}

#[derive(Debug, Serialize)]
struct TimestampView {
    micros: Timestamp,
    sec_dot_micro: String,
    utc: String,
    valid: bool,
}

impl TimestampView {
    fn new(ts: Timestamp, show_microseconds: bool) -> Self {
        Self {
            micros: ts,
            sec_dot_micro: ts.to_sec_dot_micro_string(),
            utc: ts.to_formatted_string(show_microseconds),
            valid: ts.is_valid(),
        }
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("micros", self.micros.to_string()),
            Field::new("sec.micro", self.sec_dot_micro.clone()),
            Field::new("utc", self.utc.clone()),
            Field::new("valid", self.valid.to_string()),
        ]
    }
}

fn show(ctx: CommandContext, ts: Timestamp, args: &RenderArgs) -> Result<()> {
    let view = TimestampView::new(ts, !args.no_micros);
    print_view(&view.fields(), &view, ctx.format);
    Ok(())
}
