//! Core types for the Health Series pipeline
//!
//! This module defines the normalized, chart-ready record shapes produced for
//! each metric, and the metric identifier used to dispatch between them.

use crate::error::SeriesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Health metric identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Steps,
    Stress,
    Exercise,
    Sleep,
    Summary,
}

impl Metric {
    /// All metrics, in display order
    pub const ALL: [Metric; 5] = [
        Metric::Steps,
        Metric::Stress,
        Metric::Exercise,
        Metric::Sleep,
        Metric::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Steps => "steps",
            Metric::Stress => "stress",
            Metric::Exercise => "exercise",
            Metric::Sleep => "sleep",
            Metric::Summary => "summary",
        }
    }

    /// Field names of the normalized record for this metric, `date` first
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Metric::Steps => &["date", "steps", "step_goal", "steps_pct_goal"],
            Metric::Stress => &["date", "stress_avg"],
            Metric::Exercise => &[
                "date",
                "moderate_min",
                "vigorous_min",
                "total_min",
                "exercise_pct_goal",
                "distance",
                "calories_active",
                "calories_total",
            ],
            Metric::Sleep => &[
                "date",
                "total_sleep_hours",
                "deep_sleep_hours",
                "light_sleep_hours",
                "rem_sleep_hours",
                "awake_hours",
                "avg_spo2",
                "avg_rr",
                "avg_stress",
                "score",
            ],
            Metric::Summary => &["date", "steps", "resting_heart_rate", "sleep_hours"],
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "steps" => Ok(Metric::Steps),
            "stress" => Ok(Metric::Stress),
            "exercise" => Ok(Metric::Exercise),
            "sleep" => Ok(Metric::Sleep),
            "summary" | "daily-summary" | "daily_summary" => Ok(Metric::Summary),
            other => Err(SeriesError::UnknownMetric(other.to_string())),
        }
    }
}

/// A normalized record keyed by calendar day.
///
/// Implemented by every per-metric record so the sorter, range filter and
/// inspection report can work on any series.
pub trait DailyRecord: Clone + Serialize {
    /// Canonical `YYYY-MM-DD` key, empty when the source date was unusable
    fn date(&self) -> &str;

    /// The fields that may be absent, paired with their current value
    fn optional_fields(&self) -> Vec<(&'static str, Option<f64>)>;
}

/// Daily step count against the step goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepsRecord {
    pub date: String,
    pub steps: Option<f64>,
    pub step_goal: Option<f64>,
    /// Always present; 0 when it cannot be computed
    pub steps_pct_goal: f64,
}

/// Daily average stress level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StressRecord {
    pub date: String,
    pub stress_avg: Option<f64>,
}

/// Daily intensity minutes against the intensity goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub date: String,
    pub moderate_min: Option<f64>,
    pub vigorous_min: Option<f64>,
    /// Present whenever either intensity side is present
    pub total_min: Option<f64>,
    /// Always present; 0 when it cannot be computed
    pub exercise_pct_goal: f64,
    pub distance: Option<f64>,
    pub calories_active: Option<f64>,
    pub calories_total: Option<f64>,
}

/// Nightly sleep stage durations (hours)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: String,
    pub total_sleep_hours: Option<f64>,
    pub deep_sleep_hours: Option<f64>,
    pub light_sleep_hours: Option<f64>,
    pub rem_sleep_hours: Option<f64>,
    pub awake_hours: Option<f64>,
    pub avg_spo2: Option<f64>,
    pub avg_rr: Option<f64>,
    pub avg_stress: Option<f64>,
    pub score: Option<f64>,
}

/// Daily summary row: steps, resting heart rate and sleep duration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub date: String,
    pub steps: Option<f64>,
    pub resting_heart_rate: Option<f64>,
    pub sleep_hours: Option<f64>,
}

impl DailyRecord for StepsRecord {
    fn date(&self) -> &str {
        &self.date
    }

    fn optional_fields(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![("steps", self.steps), ("step_goal", self.step_goal)]
    }
}

impl DailyRecord for StressRecord {
    fn date(&self) -> &str {
        &self.date
    }

    fn optional_fields(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![("stress_avg", self.stress_avg)]
    }
}

impl DailyRecord for ExerciseRecord {
    fn date(&self) -> &str {
        &self.date
    }

    fn optional_fields(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("moderate_min", self.moderate_min),
            ("vigorous_min", self.vigorous_min),
            ("total_min", self.total_min),
            ("distance", self.distance),
            ("calories_active", self.calories_active),
            ("calories_total", self.calories_total),
        ]
    }
}

impl DailyRecord for SleepRecord {
    fn date(&self) -> &str {
        &self.date
    }

    fn optional_fields(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("total_sleep_hours", self.total_sleep_hours),
            ("deep_sleep_hours", self.deep_sleep_hours),
            ("light_sleep_hours", self.light_sleep_hours),
            ("rem_sleep_hours", self.rem_sleep_hours),
            ("awake_hours", self.awake_hours),
            ("avg_spo2", self.avg_spo2),
            ("avg_rr", self.avg_rr),
            ("avg_stress", self.avg_stress),
            ("score", self.score),
        ]
    }
}

impl DailyRecord for SummaryRecord {
    fn date(&self) -> &str {
        &self.date
    }

    fn optional_fields(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("steps", self.steps),
            ("resting_heart_rate", self.resting_heart_rate),
            ("sleep_hours", self.sleep_hours),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_round_trips_through_str() {
        for metric in Metric::ALL {
            assert_eq!(metric.as_str().parse::<Metric>().unwrap(), metric);
        }
        assert_eq!("Daily-Summary".parse::<Metric>().unwrap(), Metric::Summary);
        assert!(matches!(
            "heart".parse::<Metric>(),
            Err(SeriesError::UnknownMetric(_))
        ));
    }

    #[test]
    fn test_fields_match_serialized_shape() {
        let value = serde_json::to_value(ExerciseRecord::default()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for field in Metric::Exercise.fields() {
            assert!(keys.contains(field), "missing {field}");
        }
        assert_eq!(keys.len(), Metric::Exercise.fields().len());
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let record = StepsRecord {
            date: "2025-06-01".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["steps"].is_null());
        assert_eq!(value["steps_pct_goal"], 0.0);
    }
}
