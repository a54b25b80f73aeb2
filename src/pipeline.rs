//! Pipeline orchestration
//!
//! This module provides the public API for Health Series.
//! It composes normalization and chronological sorting into "build series"
//! operations, and offers a processor that takes raw provider JSON through
//! build, range filter and serialization in one call.

use crate::clock::{Clock, SystemClock};
use crate::error::SeriesError;
use crate::metrics::{
    ExerciseNormalizer, MetricNormalizer, SleepNormalizer, StepsNormalizer, StressNormalizer,
    SummaryNormalizer,
};
use crate::report::{inspect_series, SeriesReport};
use crate::sort::sort_chronologically;
use crate::types::{
    ExerciseRecord, Metric, SleepRecord, StepsRecord, StressRecord, SummaryRecord,
};
use crate::window::{filter_series, ActiveWindow};
use serde_json::Value;

/// Normalize a raw payload and sort the result chronologically.
///
/// Pipeline stages:
/// 1. MetricNormalizer - Decode rows leniently and map to canonical records
/// 2. sort_chronologically - Stable ascending order by day key
pub fn build_series<N: MetricNormalizer>(raw: &Value) -> Vec<N::Record> {
    let records = N::normalize(raw);
    tracing::debug!(metric = %N::METRIC, records = records.len(), "normalized raw records");
    sort_chronologically(records)
}

/// Build the steps series from a raw steps payload
pub fn build_steps_series(raw: &Value) -> Vec<StepsRecord> {
    build_series::<StepsNormalizer>(raw)
}

/// Build the stress series from a raw stress payload
pub fn build_stress_series(raw: &Value) -> Vec<StressRecord> {
    build_series::<StressNormalizer>(raw)
}

/// Build the exercise series from a raw exercise payload
pub fn build_exercise_series(raw: &Value) -> Vec<ExerciseRecord> {
    build_series::<ExerciseNormalizer>(raw)
}

/// Build the sleep series from a raw sleep payload
pub fn build_sleep_series(raw: &Value) -> Vec<SleepRecord> {
    build_series::<SleepNormalizer>(raw)
}

/// Build the daily summary series from a raw summary payload
pub fn build_summary_series(raw: &Value) -> Vec<SummaryRecord> {
    build_series::<SummaryNormalizer>(raw)
}

/// Parse provider output text into a raw payload.
///
/// Blank text stands for "no data" and yields `null`, which every normalizer
/// treats as empty. Malformed JSON text is the one thing that errors.
pub fn parse_raw_payload(raw_json: &str) -> Result<Value, SeriesError> {
    if raw_json.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(raw_json)?)
}

/// Build a metric's series from raw JSON text and return it as JSON values
///
/// # Example
/// ```ignore
/// let series = series_from_json(Metric::Steps, r#"[{"date": "2025-06-01", "steps": 5000}]"#)?;
/// ```
pub fn series_from_json(metric: Metric, raw_json: &str) -> Result<Vec<Value>, SeriesError> {
    let processor = SeriesProcessor::new(ActiveWindow::unbounded());
    processor.process(metric, raw_json)
}

/// Processor that builds, filters and serializes a metric's series.
///
/// Holds the active window and the clock the relative window is measured
/// against.
pub struct SeriesProcessor {
    window: ActiveWindow,
    clock: Box<dyn Clock>,
}

impl Default for SeriesProcessor {
    fn default() -> Self {
        Self::new(ActiveWindow::default())
    }
}

impl SeriesProcessor {
    /// Create a processor reading today's date from the system clock
    pub fn new(window: ActiveWindow) -> Self {
        Self::with_clock(window, SystemClock)
    }

    /// Create a processor with an explicit clock
    pub fn with_clock(window: ActiveWindow, clock: impl Clock + 'static) -> Self {
        Self {
            window,
            clock: Box::new(clock),
        }
    }

    pub fn window(&self) -> &ActiveWindow {
        &self.window
    }

    /// Replace the active window
    pub fn set_window(&mut self, window: ActiveWindow) {
        self.window = window;
    }

    /// Build and filter a metric's series from raw JSON text
    pub fn process(&self, metric: Metric, raw_json: &str) -> Result<Vec<Value>, SeriesError> {
        let raw = parse_raw_payload(raw_json)?;
        self.process_value(metric, &raw)
    }

    /// Build and filter a metric's series from an already parsed payload
    pub fn process_value(&self, metric: Metric, raw: &Value) -> Result<Vec<Value>, SeriesError> {
        match metric {
            Metric::Steps => self.run::<StepsNormalizer>(raw),
            Metric::Stress => self.run::<StressNormalizer>(raw),
            Metric::Exercise => self.run::<ExerciseNormalizer>(raw),
            Metric::Sleep => self.run::<SleepNormalizer>(raw),
            Metric::Summary => self.run::<SummaryNormalizer>(raw),
        }
    }

    /// Data quality report for a metric's full (unfiltered) series
    pub fn inspect(&self, metric: Metric, raw_json: &str) -> Result<SeriesReport, SeriesError> {
        let raw = parse_raw_payload(raw_json)?;
        let report = match metric {
            Metric::Steps => inspect_series(metric, &build_steps_series(&raw)),
            Metric::Stress => inspect_series(metric, &build_stress_series(&raw)),
            Metric::Exercise => inspect_series(metric, &build_exercise_series(&raw)),
            Metric::Sleep => inspect_series(metric, &build_sleep_series(&raw)),
            Metric::Summary => inspect_series(metric, &build_summary_series(&raw)),
        };
        Ok(report)
    }

    fn run<N: MetricNormalizer>(&self, raw: &Value) -> Result<Vec<Value>, SeriesError> {
        let series = build_series::<N>(raw);
        let visible = filter_series(&series, &self.window, self.clock.as_ref());
        tracing::debug!(
            metric = %N::METRIC,
            window = %self.window.describe(),
            visible = visible.len(),
            "filtered series"
        );

        visible
            .iter()
            .map(|record| serde_json::to_value(record).map_err(SeriesError::from))
            .collect()
    }
}
