//! Metric normalizers
//!
//! One normalizer per metric maps raw provider rows onto the canonical,
//! chart-ready record for that metric. Normalizers are pure: the same rows
//! always produce the same records, and no input can make them fail.

mod exercise;
mod sleep;
mod steps;
mod stress;
mod summary;

pub use exercise::ExerciseNormalizer;
pub use sleep::SleepNormalizer;
pub use steps::StepsNormalizer;
pub use stress::StressNormalizer;
pub use summary::SummaryNormalizer;

use crate::schema::decode_raw;
use crate::types::{DailyRecord, Metric};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Trait for per-metric normalizers
pub trait MetricNormalizer {
    /// Metric this normalizer produces
    const METRIC: Metric;

    /// Lenient schema of one raw row
    type Raw: DeserializeOwned + Default;

    /// Canonical record produced for one row
    type Record: DailyRecord;

    /// Map one decoded raw row to its canonical record
    fn normalize_record(raw: Self::Raw) -> Self::Record;

    /// Normalize a raw payload.
    ///
    /// Anything other than a JSON array (including `null` for "no data") is
    /// treated as an empty payload. Output order follows input order.
    fn normalize(payload: &Value) -> Vec<Self::Record> {
        let Some(rows) = payload.as_array() else {
            if !payload.is_null() {
                tracing::warn!(
                    metric = %Self::METRIC,
                    "raw payload is not an array, treating as empty"
                );
            }
            return Vec::new();
        };

        rows.iter()
            .map(|row| Self::normalize_record(decode_raw(row)))
            .collect()
    }
}
