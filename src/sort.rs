//! Chronological ordering of normalized series

use crate::types::DailyRecord;

/// Sort records ascending by day key.
///
/// Day keys are zero-padded, so byte order is calendar order. Undated records
/// (empty key) come first, and records sharing a day keep their input order.
pub fn sort_chronologically<R: DailyRecord>(mut records: Vec<R>) -> Vec<R> {
    // sort_by is stable
    records.sort_by(|a, b| a.date().cmp(b.date()));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StressRecord;

    fn stress(date: &str, value: f64) -> StressRecord {
        StressRecord {
            date: date.to_string(),
            stress_avg: Some(value),
        }
    }

    #[test]
    fn test_sorts_ascending_with_undated_first() {
        let sorted = sort_chronologically(vec![
            stress("2025-06-03", 3.0),
            stress("2025-06-01", 1.0),
            stress("", 0.0),
            stress("2025-06-02", 2.0),
        ]);

        let dates: Vec<&str> = sorted.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["", "2025-06-01", "2025-06-02", "2025-06-03"]);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let sorted = sort_chronologically(vec![
            stress("2025-06-02", 1.0),
            stress("2025-06-01", 9.0),
            stress("2025-06-02", 2.0),
            stress("2025-06-02", 3.0),
        ]);

        let values: Vec<f64> = sorted.iter().filter_map(|r| r.stress_avg).collect();
        assert_eq!(values, vec![9.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = sort_chronologically(vec![
            stress("2025-06-05", 1.0),
            stress("", 2.0),
            stress("2025-06-01", 3.0),
            stress("2025-06-05", 4.0),
        ]);
        let twice = sort_chronologically(once.clone());
        assert_eq!(once, twice);
    }
}
