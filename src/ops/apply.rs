use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::detect;
use crate::model::config::ApplyConfig;
use crate::model::detection::{DetectedValue, Detection, DetectionKind};
use crate::model::draft::TaskDraft;

/// Why a detection was not folded into the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Confidence did not clear the gate for its kind
    LowConfidence,
    /// An earlier date already filled the draft
    DateAlreadySet,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::LowConfidence => "below confidence threshold",
            SkipReason::DateAlreadySet => "date already set",
        }
    }
}

/// What `apply_detections` did with each detection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyOutcome {
    pub applied: Vec<Detection>,
    pub skipped: Vec<(Detection, SkipReason)>,
}

/// The confidence a detection of `kind` must exceed.
pub fn threshold_for(kind: DetectionKind, gates: &ApplyConfig) -> f64 {
    match kind {
        DetectionKind::Date | DetectionKind::Time => gates.date_time_threshold,
        DetectionKind::Priority | DetectionKind::Category | DetectionKind::Duration => {
            gates.attribute_threshold
        }
    }
}

/// Fold detections into `draft` in order.
///
/// The first date wins: once `due_date` is set, later dates are skipped.
/// Categories accumulate. Time, priority and duration take the last applied value.
pub fn apply_detections(
    draft: &mut TaskDraft,
    detections: &[Detection],
    gates: &ApplyConfig,
) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for d in detections {
        if d.confidence <= threshold_for(d.kind(), gates) {
            debug!(kind = %d.kind(), confidence = d.confidence, "skipped: low confidence");
            outcome.skipped.push((d.clone(), SkipReason::LowConfidence));
            continue;
        }

        match d.value {
            DetectedValue::Date(date) => {
                if draft.due_date.is_some() {
                    debug!(%date, "skipped: date already set");
                    outcome.skipped.push((d.clone(), SkipReason::DateAlreadySet));
                    continue;
                }
                draft.due_date = Some(date);
            }
            DetectedValue::Time(time) => draft.due_time = Some(time),
            DetectedValue::Priority(p) => draft.priority = Some(p),
            DetectedValue::Category(c) => {
                draft.categories.insert(c);
            }
            DetectedValue::Duration(m) => draft.estimated_minutes = Some(m),
        }
        outcome.applied.push(d.clone());
    }

    outcome
}

/// Detect attributes in `text` and build a fresh draft from them.
pub fn draft_from_text(
    text: &str,
    today: NaiveDate,
    gates: &ApplyConfig,
) -> (TaskDraft, ApplyOutcome) {
    let detections = detect::detect_on(text, today);
    let mut draft = TaskDraft::new(text);
    let outcome = apply_detections(&mut draft, &detections, gates);
    (draft, outcome)
}
