use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use tracing::{debug, warn};

use crate::model::detection::{DetectedValue, Detection};

const CONFIDENCE: f64 = 0.85;

/// Hour used when the numeric group cannot be read
const DEFAULT_HOUR: u32 = 9;

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)at\s+(\d{1,2})(:\d{2})?\s*(am|pm)?").expect("clock pattern is valid")
});

/// First `at H[:MM][am|pm]` phrase in `text`.
///
/// A bare hour with no am/pm marker passes through unchanged, so `at 5` is 05:00.
pub(crate) fn detect_time(text: &str) -> Option<Detection> {
    let caps = CLOCK_RE.captures(text)?;
    let whole = caps.get(0)?;

    let mut hour = match caps.get(1).map(|m| m.as_str().parse::<u32>()) {
        Some(Ok(h)) if h <= 23 => h,
        other => {
            warn!(text = whole.as_str(), ?other, "unreadable hour, using default");
            DEFAULT_HOUR
        }
    };
    let minute = match caps.get(2).map(|m| m.as_str()[1..].parse::<u32>()) {
        None => 0,
        Some(Ok(m)) if m <= 59 => m,
        Some(other) => {
            warn!(text = whole.as_str(), ?other, "unreadable minute, using :00");
            0
        }
    };

    match caps.get(3).map(|m| m.as_str().to_ascii_lowercase()).as_deref() {
        Some("pm") if hour < 12 => hour += 12,
        Some(_) => {}
        None => debug!(hour, "bare hour without am/pm, taken as-is"),
    }

    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    // `\s*` before the optional marker can swallow trailing whitespace
    let matched = whole.as_str().trim_end();
    let span = whole.start()..whole.start() + matched.len();
    debug!(%time, "clock time");
    Some(Detection::new(text, span, DetectedValue::Time(time), CONFIDENCE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_of(text: &str) -> Option<(u32, u32)> {
        use chrono::Timelike;
        detect_time(text).map(|d| match d.value {
            DetectedValue::Time(t) => (t.hour(), t.minute()),
            other => panic!("expected time, got {:?}", other),
        })
    }

    #[test]
    fn test_pm_adds_twelve() {
        assert_eq!(time_of("meet at 5pm"), Some((17, 0)));
        assert_eq!(time_of("meet at 5 PM"), Some((17, 0)));
    }

    #[test]
    fn test_noon_and_midnight_markers() {
        assert_eq!(time_of("lunch at 12pm"), Some((12, 0)));
        // 12am is left as 12
        assert_eq!(time_of("deploy at 12am"), Some((12, 0)));
    }

    #[test]
    fn test_minutes() {
        assert_eq!(time_of("standup at 9:15am"), Some((9, 15)));
        assert_eq!(time_of("call at 3:45pm"), Some((15, 45)));
    }

    #[test]
    fn test_bare_hour_is_not_adjusted() {
        assert_eq!(time_of("gym at 5"), Some((5, 0)));
        assert_eq!(time_of("gym at 18"), Some((18, 0)));
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert_eq!(time_of("at 99"), Some((9, 0)));
        assert_eq!(time_of("at 10:75"), Some((10, 0)));
    }

    #[test]
    fn test_non_ascii_digit_falls_back_to_default_hour() {
        // `\d` is Unicode-aware but u32 parsing is ASCII-only
        assert_eq!(time_of("at \u{0663}"), Some((9, 0)));
    }

    #[test]
    fn test_span_excludes_trailing_whitespace() {
        let d = detect_time("ship at 4 tomorrow").unwrap();
        assert_eq!(d.matched_text, "at 4");
        assert_eq!(d.span, 5..9);
    }

    #[test]
    fn test_first_match_only() {
        assert_eq!(time_of("at 7am or at 8am"), Some((7, 0)));
    }

    #[test]
    fn test_no_time() {
        assert_eq!(time_of("call at home"), None);
        assert_eq!(time_of(""), None);
    }
}
