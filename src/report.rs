//! Series inspection
//!
//! Summarizes how complete a normalized series is: how many rows came in
//! without a usable date and how often each optional field is absent.

use crate::types::{DailyRecord, Metric};
use serde::Serialize;
use std::collections::BTreeMap;

/// Data quality report for one metric's series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesReport {
    pub metric: Metric,
    pub total_records: usize,
    /// Records whose date could not be turned into a day key
    pub undated_records: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    /// Field name to number of records where it is absent
    pub absent_values: BTreeMap<String, usize>,
}

impl SeriesReport {
    /// Fraction of optional values present across the series (0-1)
    pub fn coverage(&self) -> f64 {
        let slots: usize = self.total_records * self.absent_values.len();
        if slots == 0 {
            return 0.0;
        }
        let absent: usize = self.absent_values.values().sum();
        1.0 - (absent as f64 / slots as f64)
    }
}

/// Inspect a sorted series
pub fn inspect_series<R: DailyRecord>(metric: Metric, series: &[R]) -> SeriesReport {
    let mut absent_values: BTreeMap<String, usize> = BTreeMap::new();
    let mut undated_records = 0;

    for record in series {
        if record.date().is_empty() {
            undated_records += 1;
        }
        for (field, value) in record.optional_fields() {
            let count = absent_values.entry(field.to_string()).or_insert(0);
            if value.is_none() {
                *count += 1;
            }
        }
    }

    let mut dated = series.iter().map(|r| r.date()).filter(|d| !d.is_empty());
    let first_date = dated.next().map(str::to_string);
    let last_date = dated.last().map(str::to_string).or_else(|| first_date.clone());

    SeriesReport {
        metric,
        total_records: series.len(),
        undated_records,
        first_date,
        last_date,
        absent_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StepsRecord;

    fn steps(date: &str, steps: Option<f64>, goal: Option<f64>) -> StepsRecord {
        StepsRecord {
            date: date.to_string(),
            steps,
            step_goal: goal,
            steps_pct_goal: 0.0,
        }
    }

    #[test]
    fn test_inspect_counts_gaps() {
        let series = vec![
            steps("", Some(100.0), None),
            steps("2025-06-01", Some(5000.0), Some(10000.0)),
            steps("2025-06-02", None, Some(10000.0)),
            steps("2025-06-04", None, None),
        ];
        let report = inspect_series(Metric::Steps, &series);

        assert_eq!(report.total_records, 4);
        assert_eq!(report.undated_records, 1);
        assert_eq!(report.first_date.as_deref(), Some("2025-06-01"));
        assert_eq!(report.last_date.as_deref(), Some("2025-06-04"));
        assert_eq!(report.absent_values["steps"], 2);
        assert_eq!(report.absent_values["step_goal"], 2);
        assert!((report.coverage() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_inspect_single_and_empty() {
        let report = inspect_series(Metric::Steps, &[steps("2025-06-01", Some(1.0), Some(2.0))]);
        assert_eq!(report.first_date, report.last_date);
        assert_eq!(report.coverage(), 1.0);

        let empty: Vec<StepsRecord> = Vec::new();
        let report = inspect_series(Metric::Steps, &empty);
        assert_eq!(report.total_records, 0);
        assert_eq!(report.first_date, None);
        assert_eq!(report.last_date, None);
        assert_eq!(report.coverage(), 0.0);
    }
}
