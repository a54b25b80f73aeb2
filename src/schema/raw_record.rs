//! Per-metric raw record schemas
//!
//! Each struct mirrors the loosely-typed row a provider returns for one metric.
//! Every field is optional and decoded leniently: wrong types, nulls and
//! non-finite numbers become `None`, and the date becomes a day key.

use crate::coerce::{coerce, to_day_key};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode one raw row into its metric schema.
///
/// A row that is not a JSON object decodes to the all-absent default.
pub fn decode_raw<T>(value: &Value) -> T
where
    T: DeserializeOwned + Default,
{
    if !value.is_object() {
        return T::default();
    }
    T::deserialize(value).unwrap_or_default()
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce(&value))
}

fn lenient_day_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_day_key(&value))
}

/// Raw steps row: `date`, `steps`, `step_goal`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSteps {
    #[serde(default, deserialize_with = "lenient_day_key")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub steps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub step_goal: Option<f64>,
}

/// Raw stress row: `date`, `stress_avg`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawStress {
    #[serde(default, deserialize_with = "lenient_day_key")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub stress_avg: Option<f64>,
}

/// Raw exercise row, durations in seconds
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawExercise {
    #[serde(default, deserialize_with = "lenient_day_key")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub moderate_activity_seconds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub vigorous_activity_seconds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub intensity_time_goal_seconds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories_active: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories_total: Option<f64>,
}

/// Raw sleep row, stage durations already in hours
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSleep {
    #[serde(default, deserialize_with = "lenient_day_key")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_sleep_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub deep_sleep_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub light_sleep_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rem_sleep_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub awake_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_spo2: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_rr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_stress: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub score: Option<f64>,
}

/// Raw daily summary row (camelCase, as the summary endpoint emits it)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSummary {
    #[serde(default, deserialize_with = "lenient_day_key")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub steps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub resting_heart_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sleep_seconds: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_well_formed_row() {
        let raw: RawSteps = decode_raw(&json!({
            "date": "2025-06-01",
            "steps": 5000,
            "step_goal": 10000
        }));
        assert_eq!(raw.date, "2025-06-01");
        assert_eq!(raw.steps, Some(5000.0));
        assert_eq!(raw.step_goal, Some(10000.0));
    }

    #[test]
    fn test_decode_malformed_fields_become_absent() {
        let raw: RawSteps = decode_raw(&json!({"date": 123, "steps": "abc", "step_goal": null}));
        assert_eq!(raw.date, "123");
        assert_eq!(raw.steps, None);
        assert_eq!(raw.step_goal, None);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let raw: RawStress = decode_raw(&json!({
            "date": "2025-06-01T00:00:00",
            "stress_avg": 31,
            "stress_max": 88
        }));
        assert_eq!(raw.date, "2025-06-01");
        assert_eq!(raw.stress_avg, Some(31.0));
    }

    #[test]
    fn test_decode_non_object_rows() {
        assert_eq!(decode_raw::<RawSleep>(&json!(42)), RawSleep::default());
        assert_eq!(decode_raw::<RawSleep>(&json!(null)), RawSleep::default());
        assert_eq!(
            decode_raw::<RawSteps>(&json!(["2025-06-01", 5000, 10000])),
            RawSteps::default()
        );
    }

    #[test]
    fn test_decode_summary_uses_camel_case() {
        let raw: RawSummary = decode_raw(&json!({
            "date": "2025-06-01",
            "steps": 8000,
            "restingHeartRate": 52,
            "sleepSeconds": 27000
        }));
        assert_eq!(raw.resting_heart_rate, Some(52.0));
        assert_eq!(raw.sleep_seconds, Some(27000.0));
    }
}
