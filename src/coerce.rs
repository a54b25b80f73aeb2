//! Scalar coercion and day keys
//!
//! Every numeric value read from a raw record passes through [`coerce`], and
//! every date through [`to_day_key`]. Neither can fail: malformed input
//! degrades to `None` or an empty key.

use serde_json::Value;

/// Number of characters in a canonical `YYYY-MM-DD` day key
pub const DAY_KEY_LEN: usize = 10;

/// Coerce an arbitrary JSON value into a finite number.
///
/// Only JSON numbers that are finite survive. Strings (even numeric ones),
/// booleans, arrays, objects and null all yield `None`.
pub fn coerce(value: &Value) -> Option<f64> {
    value.as_f64().and_then(finite)
}

/// Keep a value only if it is finite
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert seconds to minutes rounded to one decimal
pub fn seconds_to_minutes(seconds: f64) -> Option<f64> {
    finite(round1(seconds / 60.0))
}

/// Convert seconds to hours rounded to two decimals
pub fn seconds_to_hours(seconds: f64) -> Option<f64> {
    finite(round2(seconds / 3600.0))
}

/// Percentage of a daily goal, rounded to one decimal.
///
/// Falls back to `0.0` rather than `None` when the goal is missing or not
/// positive, or when there is no achieved value, so goal lines stay continuous.
pub fn goal_pct(achieved: Option<f64>, goal: Option<f64>) -> f64 {
    achieved
        .zip(goal.filter(|g| *g > 0.0))
        .and_then(|(value, goal)| finite(round1(100.0 * value / goal)))
        .unwrap_or(0.0)
}

/// Reduce an arbitrary date representation to a `YYYY-MM-DD` day key.
///
/// Empty-ish values (null, `""`, `false`, `0`) give an empty key. Anything else
/// is rendered to text and cut to its first ten characters. No calendar
/// validation happens here: `"6/1/2025"` stays as is and a long non-date
/// string is truncated.
pub fn to_day_key(value: &Value) -> String {
    let text = match value {
        Value::Null | Value::Bool(false) => return String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) if n.as_f64() == Some(0.0) => return String::new(),
        other => other.to_string(),
    };
    text.chars().take(DAY_KEY_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_accepts_finite_numbers() {
        assert_eq!(coerce(&json!(5000)), Some(5000.0));
        assert_eq!(coerce(&json!(-1.25)), Some(-1.25));
        assert_eq!(coerce(&json!(0)), Some(0.0));
    }

    #[test]
    fn test_coerce_rejects_non_numbers() {
        assert_eq!(coerce(&json!("5000")), None);
        assert_eq!(coerce(&json!("abc")), None);
        assert_eq!(coerce(&json!(true)), None);
        assert_eq!(coerce(&Value::Null), None);
        assert_eq!(coerce(&json!([1])), None);
        assert_eq!(coerce(&json!({"v": 1})), None);
    }

    #[test]
    fn test_finite_filters_nan_and_infinity() {
        assert_eq!(finite(f64::NAN), None);
        assert_eq!(finite(f64::INFINITY), None);
        assert_eq!(finite(f64::NEG_INFINITY), None);
        assert_eq!(finite(1.5), Some(1.5));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(66.66), 66.7);
        assert_eq!(round2(7.456), 7.46);
        assert_eq!(seconds_to_minutes(1800.0), Some(30.0));
        assert_eq!(seconds_to_minutes(100.0), Some(1.7));
        assert_eq!(seconds_to_hours(27000.0), Some(7.5));
    }

    #[test]
    fn test_goal_pct() {
        assert_eq!(goal_pct(Some(5000.0), Some(10000.0)), 50.0);
        assert_eq!(goal_pct(Some(1.0), Some(3.0)), 33.3);
        assert_eq!(goal_pct(Some(5000.0), None), 0.0);
        assert_eq!(goal_pct(Some(5000.0), Some(0.0)), 0.0);
        assert_eq!(goal_pct(Some(5000.0), Some(-10.0)), 0.0);
        assert_eq!(goal_pct(None, Some(10000.0)), 0.0);
        assert_eq!(goal_pct(Some(f64::MAX), Some(f64::MIN_POSITIVE)), 0.0);
    }

    #[test]
    fn test_day_key_from_timestamp() {
        assert_eq!(to_day_key(&json!("2025-06-01T10:00:00Z")), "2025-06-01");
        assert_eq!(to_day_key(&json!("2025-06-01")), "2025-06-01");
    }

    #[test]
    fn test_day_key_empty_inputs() {
        assert_eq!(to_day_key(&Value::Null), "");
        assert_eq!(to_day_key(&json!("")), "");
        assert_eq!(to_day_key(&json!(false)), "");
        assert_eq!(to_day_key(&json!(0)), "");
    }

    #[test]
    fn test_day_key_keeps_malformed_text() {
        assert_eq!(to_day_key(&json!(123)), "123");
        assert_eq!(to_day_key(&json!("6/1/2025")), "6/1/2025");
        assert_eq!(to_day_key(&json!("not a date at all")), "not a date");
        assert_eq!(to_day_key(&json!("ääääääääääää")), "ääääääääää");
    }
}
