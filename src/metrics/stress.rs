//! Stress normalizer

use crate::schema::RawStress;
use crate::types::{Metric, StressRecord};

use super::MetricNormalizer;

/// Stress normalizer
pub struct StressNormalizer;

impl MetricNormalizer for StressNormalizer {
    const METRIC: Metric = Metric::Stress;
    type Raw = RawStress;
    type Record = StressRecord;

    fn normalize_record(raw: RawStress) -> StressRecord {
        StressRecord {
            date: raw.date,
            stress_avg: raw.stress_avg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_stress() {
        let records = StressNormalizer::normalize(&json!([
            {"date": "2025-06-01", "stress_avg": 27},
            {"date": "2025-06-02", "stress_avg": "high"},
            {"date": "2025-06-03"}
        ]));

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].stress_avg, Some(27.0));
        assert_eq!(records[1].stress_avg, None);
        assert_eq!(records[2].stress_avg, None);
        assert_eq!(records[2].date, "2025-06-03");
    }
}
