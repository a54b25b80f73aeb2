//! Daily summary normalizer
//!
//! The summary row reports sleep in seconds; it is exposed in hours with two
//! decimals, matching the sleep endpoint's own hour columns.

use crate::coerce::seconds_to_hours;
use crate::schema::RawSummary;
use crate::types::{Metric, SummaryRecord};

use super::MetricNormalizer;

/// Daily summary normalizer
pub struct SummaryNormalizer;

impl MetricNormalizer for SummaryNormalizer {
    const METRIC: Metric = Metric::Summary;
    type Raw = RawSummary;
    type Record = SummaryRecord;

    fn normalize_record(raw: RawSummary) -> SummaryRecord {
        SummaryRecord {
            date: raw.date,
            steps: raw.steps,
            resting_heart_rate: raw.resting_heart_rate,
            sleep_hours: raw.sleep_seconds.and_then(seconds_to_hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_summary() {
        let records = SummaryNormalizer::normalize(&json!([
            {"date": "2025-06-01", "steps": 9000, "restingHeartRate": 51, "sleepSeconds": 26100},
            {"date": "2025-06-02", "steps": 4000, "restingHeartRate": 53, "sleepSeconds": null}
        ]));

        assert_eq!(records[0].sleep_hours, Some(7.25));
        assert_eq!(records[0].resting_heart_rate, Some(51.0));
        assert_eq!(records[1].sleep_hours, None);
        assert_eq!(records[1].steps, Some(4000.0));
    }
}
