use tracing::debug;

use crate::model::detection::{DetectedValue, Detection, Priority};

/// Trailing `!` markers, longest first so `!!!` is never read as `!`.
pub(crate) fn detect_priority(text: &str) -> Option<Detection> {
    let priority = [Priority::High, Priority::Medium, Priority::Low]
        .into_iter()
        .find(|p| text.ends_with(p.marker()))?;

    let confidence = match priority {
        Priority::Low => 0.9,
        Priority::Medium | Priority::High => 1.0,
    };
    let start = text.len() - priority.marker().len();
    debug!(%priority, "priority suffix");
    Some(Detection::new(
        text,
        start..text.len(),
        DetectedValue::Priority(priority),
        confidence,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priority_of(text: &str) -> Option<Priority> {
        detect_priority(text).map(|d| match d.value {
            DetectedValue::Priority(p) => p,
            other => panic!("expected priority, got {:?}", other),
        })
    }

    #[test]
    fn test_suffix_precedence() {
        assert_eq!(priority_of("buy milk!!!"), Some(Priority::High));
        assert_eq!(priority_of("buy milk!!"), Some(Priority::Medium));
        assert_eq!(priority_of("buy milk!"), Some(Priority::Low));
        assert_eq!(priority_of("buy milk"), None);
    }

    #[test]
    fn test_low_has_lower_confidence() {
        assert_eq!(detect_priority("hurry!").unwrap().confidence, 0.9);
        assert_eq!(detect_priority("hurry!!").unwrap().confidence, 1.0);
    }

    #[test]
    fn test_span_covers_marker_only() {
        let d = detect_priority("fix prod!!!!").unwrap();
        assert_eq!(d.matched_text, "!!!");
        assert_eq!(d.span, 9..12);
    }

    #[test]
    fn test_marker_must_be_trailing() {
        assert_eq!(priority_of("wow! that was fast"), None);
        assert_eq!(priority_of("urgent!! "), None);
    }
}
