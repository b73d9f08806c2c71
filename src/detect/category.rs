use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::detection::{Category, DetectedValue, Detection};

const CONFIDENCE: f64 = 0.95;

static HASHTAG_RES: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    Category::ALL
        .into_iter()
        .map(|c| {
            let re = Regex::new(&format!("(?i){}", regex::escape(c.hashtag())))
                .expect("hashtag pattern is valid");
            (c, re)
        })
        .collect()
});

/// Every category whose hashtag appears anywhere in `text`.
pub(crate) fn detect_categories(text: &str) -> Vec<Detection> {
    HASHTAG_RES
        .iter()
        .filter_map(|(category, re)| {
            let m = re.find(text)?;
            debug!(%category, "category hashtag");
            Some(Detection::new(
                text,
                m.range(),
                DetectedValue::Category(*category),
                CONFIDENCE,
            ))
        })
        .collect()
}
