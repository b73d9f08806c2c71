use serde::{Deserialize, Serialize};

/// Configuration from veloce.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub apply: ApplyConfig,
    #[serde(default)]
    pub live: LiveConfig,
}

/// Confidence gates for folding detections into a draft.
/// A detection applies only when its confidence is strictly greater.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplyConfig {
    /// Gate for dates and times
    #[serde(default = "default_date_time_threshold")]
    pub date_time_threshold: f64,
    /// Gate for priority, category and duration
    #[serde(default = "default_attribute_threshold")]
    pub attribute_threshold: f64,
}

impl Default for ApplyConfig {
    fn default() -> Self {
        ApplyConfig {
            date_time_threshold: default_date_time_threshold(),
            attribute_threshold: default_attribute_threshold(),
        }
    }
}

fn default_date_time_threshold() -> f64 {
    0.8
}

fn default_attribute_threshold() -> f64 {
    0.9
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Quiet period after the last keystroke before detection runs
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        LiveConfig {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    200
}
