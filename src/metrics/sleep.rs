//! Sleep normalizer

use crate::schema::RawSleep;
use crate::types::{Metric, SleepRecord};

use super::MetricNormalizer;

/// Sleep normalizer
pub struct SleepNormalizer;

impl MetricNormalizer for SleepNormalizer {
    const METRIC: Metric = Metric::Sleep;
    type Raw = RawSleep;
    type Record = SleepRecord;

    fn normalize_record(raw: RawSleep) -> SleepRecord {
        SleepRecord {
            date: raw.date,
            total_sleep_hours: raw.total_sleep_hours,
            deep_sleep_hours: raw.deep_sleep_hours,
            light_sleep_hours: raw.light_sleep_hours,
            rem_sleep_hours: raw.rem_sleep_hours,
            awake_hours: raw.awake_hours,
            avg_spo2: raw.avg_spo2,
            avg_rr: raw.avg_rr,
            avg_stress: raw.avg_stress,
            score: raw.score,
        }
    }
}
