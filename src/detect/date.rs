use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;
use tracing::{debug, warn};

use crate::model::detection::{DetectedValue, Detection};

/// Relative date keywords: (pattern, days from today, confidence)
const KEYWORDS: [(&str, u64, f64); 3] = [
    ("today", 0, 0.95),
    ("tomorrow", 1, 0.95),
    ("next week", 7, 0.9),
];

static KEYWORD_RES: LazyLock<Vec<(Regex, u64, f64)>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|&(word, days, confidence)| {
            let re = Regex::new(&format!("(?i){}", regex::escape(word)))
                .expect("date keyword pattern is valid");
            (re, days, confidence)
        })
        .collect()
});

/// One detection per keyword present (its first occurrence), resolved against `today`.
pub(crate) fn detect_dates(text: &str, today: NaiveDate) -> Vec<Detection> {
    let mut detections = Vec::new();
    for (re, days, confidence) in KEYWORD_RES.iter() {
        let Some(m) = re.find(text) else {
            continue;
        };
        let Some(date) = today.checked_add_days(Days::new(*days)) else {
            warn!(keyword = m.as_str(), %today, "date keyword overflows the calendar");
            continue;
        };
        debug!(keyword = m.as_str(), %date, "date keyword");
        detections.push(Detection::new(
            text,
            m.range(),
            DetectedValue::Date(date),
            *confidence,
        ));
    }
    detections
}
