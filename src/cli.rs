//! CLI argument parsing for the season resolver.
//!
//! The CLI is thin: every command resolves a date against one anchor table and
//! prints the result, so the resolver stays a pure function.
use crate::util::parse_date;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "season",
    version,
    about = "Liturgical season resolver",
    after_help = "Examples:\n  season current\n  season current --date 2025-03-05 --json\n  season order --date 2024-11-30\n  season calendar --year 2026\n  season content --json\n  season anchors --anchors ./anchors.json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Anchor table JSON to use instead of the built-in 2025-2035 table
    #[arg(long, value_name = "PATH", global = true)]
    pub anchors: Option<PathBuf>,

    /// Emit debug diagnostics on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the season in effect on a date
    Current(DateArgs),
    /// Print all six seasons starting from the current one
    Order(DateArgs),
    /// List the season spans of a civil year
    Calendar(CalendarArgs),
    /// Print the homepage content record for the current season
    Content(DateArgs),
    /// Validate and print the active anchor table
    Anchors(AnchorsArgs),
}

/// Inputs shared by commands that resolve a single date.
#[derive(Args, Debug, Clone)]
pub struct DateArgs {
    /// Resolve this local date instead of today
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Calendar command inputs.
#[derive(Args, Debug, Clone)]
pub struct CalendarArgs {
    /// Civil year to list
    #[arg(long, value_name = "YEAR")]
    pub year: i32,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Anchors command inputs.
#[derive(Args, Debug, Clone)]
pub struct AnchorsArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
