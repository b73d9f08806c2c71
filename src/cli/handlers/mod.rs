mod live;
pub use live::cmd_live;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::detect;
use crate::io::config_io;
use crate::model::config::Config;
use crate::ops::apply;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Detect(args) => cmd_detect(args, json),
        Commands::Draft(args) => cmd_draft(args, &config, json),
        Commands::Live(args) => cmd_live(args, &config, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_detect(args: DetectArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let today = resolve_today(args.today);
    let detections = detect::detect_on(&args.text, today);
    info!(%today, count = detections.len(), "detect");

    if json {
        let out: Vec<DetectionJson> = detections.iter().map(detection_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for line in format_detections(&args.text, &detections) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_draft(args: DraftArgs, config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let today = resolve_today(args.today);
    let (draft, outcome) = apply::draft_from_text(&args.text, today, &config.apply);
    info!(
        %today,
        applied = outcome.applied.len(),
        skipped = outcome.skipped.len(),
        "draft"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&draft_to_json(&draft, &outcome))?);
    } else {
        for line in format_draft(&draft, &outcome) {
            println!("{}", line);
        }
    }
    Ok(())
}
