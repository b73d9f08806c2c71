use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::detection::{Category, Priority};

/// A task being composed in the quick-add bar, before it is saved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// The raw text as typed
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_time: Option<NaiveTime>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub categories: BTreeSet<Category>,
    /// Estimated effort in minutes
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        TaskDraft {
            title: title.into(),
            ..TaskDraft::default()
        }
    }

    /// True if nothing beyond the title has been filled in
    pub fn is_bare(&self) -> bool {
        self.due_date.is_none()
            && self.due_time.is_none()
            && self.priority.is_none()
            && self.categories.is_empty()
            && self.estimated_minutes.is_none()
    }
}
