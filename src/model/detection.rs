use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Which rule produced a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionKind {
    Date,
    Time,
    Priority,
    Category,
    Duration,
}

impl DetectionKind {
    pub fn label(self) -> &'static str {
        match self {
            DetectionKind::Date => "date",
            DetectionKind::Time => "time",
            DetectionKind::Priority => "priority",
            DetectionKind::Category => "category",
            DetectionKind::Duration => "duration",
        }
    }
}

impl fmt::Display for DetectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task urgency, set by trailing `!` markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// The trailing marker that selects this priority
    pub fn marker(self) -> &'static str {
        match self {
            Priority::Low => "!",
            Priority::Medium => "!!",
            Priority::High => "!!!",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed set of task categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Health,
    Errands,
    Learning,
    Creative,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Work,
        Category::Personal,
        Category::Health,
        Category::Errands,
        Category::Learning,
        Category::Creative,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Health => "health",
            Category::Errands => "errands",
            Category::Learning => "learning",
            Category::Creative => "creative",
        }
    }

    /// The hashtag that selects this category, e.g. `#work`
    pub fn hashtag(self) -> &'static str {
        match self {
            Category::Work => "#work",
            Category::Personal => "#personal",
            Category::Health => "#health",
            Category::Errands => "#errands",
            Category::Learning => "#learning",
            Category::Creative => "#creative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts `work`, `Work` or `#work`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix('#').unwrap_or(name);
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The interpreted payload of a detection. The variant determines the kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DetectedValue {
    Date(NaiveDate),
    Time(NaiveTime),
    Priority(Priority),
    Category(Category),
    /// Minutes
    Duration(u32),
}

impl DetectedValue {
    pub fn kind(&self) -> DetectionKind {
        match self {
            DetectedValue::Date(_) => DetectionKind::Date,
            DetectedValue::Time(_) => DetectionKind::Time,
            DetectedValue::Priority(_) => DetectionKind::Priority,
            DetectedValue::Category(_) => DetectionKind::Category,
            DetectedValue::Duration(_) => DetectionKind::Duration,
        }
    }
}

impl fmt::Display for DetectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectedValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DetectedValue::Time(t) => write!(f, "{}", t.format("%H:%M")),
            DetectedValue::Priority(p) => write!(f, "{}", p),
            DetectedValue::Category(c) => write!(f, "{}", c),
            DetectedValue::Duration(m) => write!(f, "{}min", m),
        }
    }
}

/// One attribute found in quick-add text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// The exact substring of the input that triggered the detection
    pub matched_text: String,
    /// Byte range of `matched_text` in the original input
    pub span: Range<usize>,
    pub value: DetectedValue,
    /// Fixed per-rule score in `[0, 1]`
    pub confidence: f64,
}

impl Detection {
    /// Build a detection for `span` of `text`. The span must lie on char boundaries.
    pub fn new(text: &str, span: Range<usize>, value: DetectedValue, confidence: f64) -> Self {
        Detection {
            matched_text: text[span.clone()].to_string(),
            span,
            value,
            confidence,
        }
    }

    pub fn kind(&self) -> DetectionKind {
        self.value.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_matches_variant() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(DetectedValue::Date(date).kind(), DetectionKind::Date);
        assert_eq!(
            DetectedValue::Priority(Priority::High).kind(),
            DetectionKind::Priority
        );
        assert_eq!(DetectedValue::Duration(30).kind(), DetectionKind::Duration);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("work".parse::<Category>(), Ok(Category::Work));
        assert_eq!("#Learning".parse::<Category>(), Ok(Category::Learning));
        assert_eq!(" ERRANDS ".parse::<Category>(), Ok(Category::Errands));
        assert!("#gardening".parse::<Category>().is_err());
    }

    #[test]
    fn test_detection_new_slices_input() {
        let text = "call mom today";
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let d = Detection::new(text, 9..14, DetectedValue::Date(date), 0.95);
        assert_eq!(d.matched_text, "today");
        assert_eq!(d.kind(), DetectionKind::Date);
    }

    #[test]
    fn test_value_serializes_tagged() {
        let json = serde_json::to_string(&DetectedValue::Category(Category::Health)).unwrap();
        assert_eq!(json, r#"{"kind":"category","value":"health"}"#);
        let json = serde_json::to_string(&DetectedValue::Duration(45)).unwrap();
        assert_eq!(json, r#"{"kind":"duration","value":45}"#);
    }

    #[test]
    fn test_value_display() {
        let t = NaiveTime::from_hms_opt(17, 5, 0).unwrap();
        assert_eq!(DetectedValue::Time(t).to_string(), "17:05");
        assert_eq!(DetectedValue::Duration(120).to_string(), "120min");
        assert_eq!(DetectedValue::Priority(Priority::Medium).to_string(), "medium");
    }
}
