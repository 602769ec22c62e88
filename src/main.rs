use anyhow::Result;
use clap::Parser;

mod anchors;
mod cards;
mod cli;
mod commands;
mod content;
mod logging;
mod resolver;
mod season;
mod templates;
mod util;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    logging::init_logging(args.verbose);
    let table = commands::load_anchor_table(args.anchors.as_deref())?;

    match args.command {
        Command::Current(args) => commands::run_current(args, &table),
        Command::Order(args) => commands::run_order(args, &table),
        Command::Calendar(args) => commands::run_calendar(args, &table),
        Command::Content(args) => commands::run_content(args, &table),
        Command::Anchors(args) => commands::run_anchors(args, &table),
    }
}
