use serde::Serialize;
use serde_json::json;

use crate::model::detection::{Category, DetectedValue, Detection, DetectionKind, Priority};
use crate::model::draft::TaskDraft;
use crate::ops::apply::{ApplyOutcome, SkipReason};
use crate::util::unicode::caret_line;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct DetectionJson {
    pub kind: DetectionKind,
    pub matched_text: String,
    pub start: usize,
    pub end: usize,
    pub value: serde_json::Value,
    pub confidence: f64,
}

#[derive(Serialize)]
pub struct DraftJson {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedJson>,
}

#[derive(Serialize)]
pub struct SkippedJson {
    pub kind: DetectionKind,
    pub matched_text: String,
    pub reason: SkipReason,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn value_to_json(value: &DetectedValue) -> serde_json::Value {
    match value {
        DetectedValue::Date(d) => json!(d.format("%Y-%m-%d").to_string()),
        DetectedValue::Time(t) => json!(t.format("%H:%M").to_string()),
        DetectedValue::Priority(p) => json!(p),
        DetectedValue::Category(c) => json!(c),
        DetectedValue::Duration(m) => json!(m),
    }
}

pub fn detection_to_json(d: &Detection) -> DetectionJson {
    DetectionJson {
        kind: d.kind(),
        matched_text: d.matched_text.clone(),
        start: d.span.start,
        end: d.span.end,
        value: value_to_json(&d.value),
        confidence: d.confidence,
    }
}

pub fn draft_to_json(draft: &TaskDraft, outcome: &ApplyOutcome) -> DraftJson {
    DraftJson {
        title: draft.title.clone(),
        due_date: draft.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
        due_time: draft.due_time.map(|t| t.format("%H:%M").to_string()),
        priority: draft.priority,
        categories: draft.categories.iter().copied().collect(),
        estimated_minutes: draft.estimated_minutes,
        skipped: outcome
            .skipped
            .iter()
            .map(|(d, reason)| SkippedJson {
                kind: d.kind(),
                matched_text: d.matched_text.clone(),
                reason: *reason,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// The input followed by one caret line per detection
pub fn format_detections(text: &str, detections: &[Detection]) -> Vec<String> {
    if detections.is_empty() {
        return vec!["no attributes detected".to_string()];
    }
    let mut lines = vec![text.to_string()];
    for d in detections {
        lines.push(format!(
            "{} {} {} ({})",
            caret_line(text, &d.span),
            d.kind(),
            d.value,
            d.confidence
        ));
    }
    lines
}

/// `90` -> `1h 30m`, `45` -> `45m`, `120` -> `2h`
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

fn format_categories(draft: &TaskDraft) -> String {
    draft
        .categories
        .iter()
        .map(|c| c.hashtag())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Labelled draft fields, skipping empty ones, then any skipped detections
pub fn format_draft(draft: &TaskDraft, outcome: &ApplyOutcome) -> Vec<String> {
    let mut lines = vec![format!("title:    {}", draft.title)];

    match (draft.due_date, draft.due_time) {
        (Some(d), Some(t)) => lines.push(format!(
            "due:      {} {}",
            d.format("%Y-%m-%d"),
            t.format("%H:%M")
        )),
        (Some(d), None) => lines.push(format!("due:      {}", d.format("%Y-%m-%d"))),
        (None, Some(t)) => lines.push(format!("at:       {}", t.format("%H:%M"))),
        (None, None) => {}
    }
    if let Some(p) = draft.priority {
        lines.push(format!("priority: {}", p));
    }
    if !draft.categories.is_empty() {
        lines.push(format!("tags:     {}", format_categories(draft)));
    }
    if let Some(m) = draft.estimated_minutes {
        lines.push(format!("estimate: {}", format_minutes(m)));
    }

    for (d, reason) in &outcome.skipped {
        lines.push(format!(
            "skipped:  {} \"{}\" ({})",
            d.kind(),
            d.matched_text,
            reason.describe()
        ));
    }
    lines
}

/// One-line draft summary for streaming output
pub fn format_draft_line(draft: &TaskDraft) -> String {
    let mut parts = vec![format!("\"{}\"", draft.title)];
    if let Some(d) = draft.due_date {
        parts.push(format!("due={}", d.format("%Y-%m-%d")));
    }
    if let Some(t) = draft.due_time {
        parts.push(format!("at={}", t.format("%H:%M")));
    }
    if let Some(p) = draft.priority {
        parts.push(format!("priority={}", p));
    }
    if !draft.categories.is_empty() {
        parts.push(format_categories(draft));
    }
    if let Some(m) = draft.estimated_minutes {
        parts.push(format!("estimate={}", format_minutes(m)));
    }
    parts.join(" ")
}
