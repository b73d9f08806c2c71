use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "veloce", about = concat!("veloce v", env!("CARGO_PKG_VERSION"), " - dates, times and tags from quick-add text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./veloce.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every attribute detected in the text
    Detect(DetectArgs),
    /// Build a task draft from the text using the confidence gates
    Draft(DraftArgs),
    /// Read input snapshots from stdin, debounce them, and print drafts
    Live(LiveArgs),
}

#[derive(Args)]
pub struct DetectArgs {
    /// Quick-add text
    pub text: String,
    /// Resolve relative dates against this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[derive(Args)]
pub struct DraftArgs {
    /// Quick-add text
    pub text: String,
    /// Resolve relative dates against this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[derive(Args)]
pub struct LiveArgs {
    /// Resolve relative dates against this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<NaiveDate>,
}
