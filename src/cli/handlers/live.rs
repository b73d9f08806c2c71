use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use tracing::{info, warn};

use super::resolve_today;
use crate::cli::commands::LiveArgs;
use crate::cli::output::{draft_to_json, format_draft_line};
use crate::model::config::Config;
use crate::model::input_bar::{InputBarMode, InputEvent};
use crate::ops::live::{DetectionBatch, LiveSession};

/// Each stdin line is the full contents of the input bar at that moment.
/// Drafts are printed only for snapshots that stay unchanged for the quiet
/// period; the last snapshot is flushed at end of input.
pub fn cmd_live(args: LiveArgs, config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let today = resolve_today(args.today);
    let (tx, rx) = mpsc::channel::<String>();

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("stdin read failed: {}", e);
                    break;
                }
            }
        }
    });

    let mut mode = InputBarMode::default().on(InputEvent::Focus)?;
    let mut session = LiveSession::new(config);
    info!(debounce_ms = config.live.debounce_ms, %today, "live session started");

    loop {
        let received = match session.next_deadline() {
            Some(due) => rx.recv_timeout(due.saturating_duration_since(Instant::now())),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(line) => {
                if mode.accepts_text() {
                    session.input(line, Instant::now());
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(batch) = session.tick(Instant::now(), today) {
                    emit(&mut session, batch, json)?;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if let Some(batch) = session.finish(today) {
        emit(&mut session, batch, json)?;
    }
    mode = mode.on(InputEvent::Submit)?;
    info!(?mode, "live session ended");
    Ok(())
}

fn emit(session: &mut LiveSession, batch: DetectionBatch, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let Some(outcome) = session.accept(batch) else {
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string(&draft_to_json(session.draft(), &outcome))?);
    } else {
        println!("{}", format_draft_line(session.draft()));
    }
    Ok(())
}
