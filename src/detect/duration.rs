use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::model::detection::{DetectedValue, Detection};

const CONFIDENCE: f64 = 0.9;

/// Minutes used when the number cannot be read
const DEFAULT_MINUTES: u32 = 30;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(min|m|hour|h|hr)s?").expect("duration pattern is valid")
});

/// First `N min` / `N h` style phrase, normalized to minutes.
pub(crate) fn detect_duration(text: &str) -> Option<Detection> {
    let caps = DURATION_RE.captures(text)?;
    let whole = caps.get(0)?;
    let unit = caps.get(2)?.as_str().to_ascii_lowercase();
    let per_unit = if unit.contains('h') { 60 } else { 1 };

    let minutes = caps
        .get(1)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .and_then(|n| n.checked_mul(per_unit))
        .unwrap_or_else(|| {
            warn!(text = whole.as_str(), "unreadable duration, using default");
            DEFAULT_MINUTES
        });

    debug!(minutes, "duration");
    Some(Detection::new(
        text,
        whole.range(),
        DetectedValue::Duration(minutes),
        CONFIDENCE,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes_of(text: &str) -> Option<u32> {
        detect_duration(text).map(|d| match d.value {
            DetectedValue::Duration(m) => m,
            other => panic!("expected duration, got {:?}", other),
        })
    }

    #[test]
    fn test_hour_units() {
        assert_eq!(minutes_of("workout for 2h"), Some(120));
        assert_eq!(minutes_of("read 1 hour"), Some(60));
        assert_eq!(minutes_of("deep work 3 hours"), Some(180));
        assert_eq!(minutes_of("drive 2HR"), Some(120));
    }

    #[test]
    fn test_minute_units() {
        assert_eq!(minutes_of("call for 45min"), Some(45));
        assert_eq!(minutes_of("stretch 10 mins"), Some(10));
        assert_eq!(minutes_of("nap 20m"), Some(20));
    }

    #[test]
    fn test_matched_text_includes_plural() {
        let d = detect_duration("plan 2 hours ahead").unwrap();
        assert_eq!(d.matched_text, "2 hours");
        assert_eq!(d.span, 5..12);
    }

    #[test]
    fn test_first_match_only() {
        assert_eq!(minutes_of("15min warmup then 1h run"), Some(15));
    }

    #[test]
    fn test_unreadable_number_falls_back() {
        assert_eq!(minutes_of("wait 99999999999min"), Some(30));
        assert_eq!(minutes_of("wait 99999999h"), Some(30));
    }

    #[test]
    fn test_no_duration() {
        assert_eq!(minutes_of("meet at 5pm"), None);
        assert_eq!(minutes_of("no numbers here"), None);
    }
}
