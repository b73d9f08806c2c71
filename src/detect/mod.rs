//! Heuristic attribute detection for quick-add task text.
//!
//! Each rule scans the full input independently. Results are aggregated and
//! ordered by where they occur in the text; nothing is short-circuited.

mod category;
mod clock;
mod date;
mod duration;
mod priority;

use chrono::{Local, NaiveDate};
use tracing::{debug, trace};

use crate::model::detection::Detection;

/// Detect attributes in `text`, resolving relative dates against the local date.
pub fn detect(text: &str) -> Vec<Detection> {
    detect_on(text, Local::now().date_naive())
}

/// Detect attributes in `text`, resolving relative dates against `today`.
///
/// Never fails: text with nothing recognizable yields an empty list.
pub fn detect_on(text: &str, today: NaiveDate) -> Vec<Detection> {
    let mut detections = date::detect_dates(text, today);
    detections.extend(clock::detect_time(text));
    detections.extend(priority::detect_priority(text));
    detections.extend(category::detect_categories(text));
    detections.extend(duration::detect_duration(text));

    // Stable: ties keep rule order
    detections.sort_by_key(|d| d.span.start);

    if detections.is_empty() {
        trace!(text, "no attributes detected");
    } else {
        debug!(count = detections.len(), "attributes detected");
    }
    detections
}
