//! Exercise normalizer
//!
//! Intensity durations arrive in seconds and leave in minutes. The total is
//! summed in seconds before conversion so rounding is applied once.

use crate::coerce::{goal_pct, seconds_to_minutes};
use crate::schema::RawExercise;
use crate::types::{ExerciseRecord, Metric};

use super::MetricNormalizer;

/// Exercise normalizer
pub struct ExerciseNormalizer;

impl MetricNormalizer for ExerciseNormalizer {
    const METRIC: Metric = Metric::Exercise;
    type Raw = RawExercise;
    type Record = ExerciseRecord;

    fn normalize_record(raw: RawExercise) -> ExerciseRecord {
        let moderate = raw.moderate_activity_seconds;
        let vigorous = raw.vigorous_activity_seconds;

        // A missing side counts as zero, but only if the other side exists
        let total_seconds = match (moderate, vigorous) {
            (None, None) => None,
            (m, v) => Some(m.unwrap_or(0.0) + v.unwrap_or(0.0)),
        };
        let total_min = total_seconds.and_then(seconds_to_minutes);
        let goal_min = raw.intensity_time_goal_seconds.and_then(seconds_to_minutes);

        ExerciseRecord {
            date: raw.date,
            moderate_min: moderate.and_then(seconds_to_minutes),
            vigorous_min: vigorous.and_then(seconds_to_minutes),
            total_min,
            exercise_pct_goal: goal_pct(total_min, goal_min),
            distance: raw.distance,
            calories_active: raw.calories_active,
            calories_total: raw.calories_total,
        }
    }
}
