use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::debug;

use crate::detect;
use crate::model::config::{ApplyConfig, Config};
use crate::model::detection::Detection;
use crate::model::draft::TaskDraft;
use crate::ops::apply::{self, ApplyOutcome};
use crate::ops::debounce::Debouncer;

/// Detections for one input snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionBatch {
    pub generation: u64,
    pub text: String,
    pub detections: Vec<Detection>,
}

/// Quick-add input session: debounces keystrokes, detects, and keeps the
/// draft in step with the most recent snapshot only.
#[derive(Debug)]
pub struct LiveSession {
    debouncer: Debouncer<String>,
    gates: ApplyConfig,
    draft: TaskDraft,
}

impl LiveSession {
    pub fn new(config: &Config) -> Self {
        LiveSession {
            debouncer: Debouncer::new(Duration::from_millis(config.live.debounce_ms)),
            gates: config.apply,
            draft: TaskDraft::default(),
        }
    }

    /// Record the current contents of the input. Returns the snapshot's generation.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) -> u64 {
        self.debouncer.push(text.into(), now)
    }

    /// When the pending snapshot becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Run detection on the pending snapshot once input has gone quiet.
    pub fn tick(&mut self, now: Instant, today: NaiveDate) -> Option<DetectionBatch> {
        let (generation, text) = self.debouncer.poll(now)?;
        Some(run(generation, text, today))
    }

    /// Run detection on the pending snapshot without waiting.
    pub fn finish(&mut self, today: NaiveDate) -> Option<DetectionBatch> {
        let (generation, text) = self.debouncer.flush()?;
        Some(run(generation, text, today))
    }

    /// Apply `batch` if it still reflects the latest input.
    /// A stale batch is dropped and `None` returned.
    pub fn accept(&mut self, batch: DetectionBatch) -> Option<ApplyOutcome> {
        if !self.debouncer.is_current(batch.generation) {
            debug!(
                stale = batch.generation,
                current = self.debouncer.generation(),
                "discarding stale detections"
            );
            return None;
        }
        let mut draft = TaskDraft::new(batch.text);
        let outcome = apply::apply_detections(&mut draft, &batch.detections, &self.gates);
        self.draft = draft;
        Some(outcome)
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }
}

fn run(generation: u64, text: String, today: NaiveDate) -> DetectionBatch {
    let detections = detect::detect_on(&text, today);
    DetectionBatch {
        generation,
        text,
        detections,
    }
}
