//! Steps normalizer

use crate::coerce::goal_pct;
use crate::schema::RawSteps;
use crate::types::{Metric, StepsRecord};

use super::MetricNormalizer;

/// Steps normalizer
pub struct StepsNormalizer;

impl MetricNormalizer for StepsNormalizer {
    const METRIC: Metric = Metric::Steps;
    type Raw = RawSteps;
    type Record = StepsRecord;

    fn normalize_record(raw: RawSteps) -> StepsRecord {
        StepsRecord {
            steps_pct_goal: goal_pct(raw.steps, raw.step_goal),
            date: raw.date,
            steps: raw.steps,
            step_goal: raw.step_goal,
        }
    }
}
