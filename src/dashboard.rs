//! Dashboard state and derived views
//!
//! [`Dashboard`] holds the latest series for every metric together with the
//! active window. Stored series are only ever replaced whole; the visible view
//! is a pure function of (series, window, clock) and is recomputed on request.

use crate::clock::Clock;
use crate::pipeline::{
    build_exercise_series, build_sleep_series, build_steps_series, build_stress_series,
    build_summary_series,
};
use crate::types::{
    ExerciseRecord, Metric, SleepRecord, StepsRecord, StressRecord, SummaryRecord,
};
use crate::window::{filter_series, ActiveWindow};
use serde::Serialize;
use serde_json::Value;

/// Stored series for every metric plus the active window
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    window: ActiveWindow,
    steps: Vec<StepsRecord>,
    stress: Vec<StressRecord>,
    exercise: Vec<ExerciseRecord>,
    sleep: Vec<SleepRecord>,
    summary: Vec<SummaryRecord>,
}

/// Filtered view of every metric under one window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub window: String,
    pub steps: Vec<StepsRecord>,
    pub stress: Vec<StressRecord>,
    pub exercise: Vec<ExerciseRecord>,
    pub sleep: Vec<SleepRecord>,
    pub summary: Vec<SummaryRecord>,
}

impl Dashboard {
    pub fn new(window: ActiveWindow) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    pub fn window(&self) -> &ActiveWindow {
        &self.window
    }

    /// Change the active window. Stored series are left untouched.
    pub fn set_window(&mut self, window: ActiveWindow) {
        tracing::debug!(window = %window.describe(), "active window changed");
        self.window = window;
    }

    /// Build a metric's series from a fresh raw payload, replacing the old one
    pub fn load(&mut self, metric: Metric, raw: &Value) {
        match metric {
            Metric::Steps => self.steps = build_steps_series(raw),
            Metric::Stress => self.stress = build_stress_series(raw),
            Metric::Exercise => self.exercise = build_exercise_series(raw),
            Metric::Sleep => self.sleep = build_sleep_series(raw),
            Metric::Summary => self.summary = build_summary_series(raw),
        }
    }

    pub fn steps(&self) -> &[StepsRecord] {
        &self.steps
    }

    pub fn stress(&self) -> &[StressRecord] {
        &self.stress
    }

    pub fn exercise(&self) -> &[ExerciseRecord] {
        &self.exercise
    }

    pub fn sleep(&self) -> &[SleepRecord] {
        &self.sleep
    }

    pub fn summary(&self) -> &[SummaryRecord] {
        &self.summary
    }

    pub fn visible_steps(&self, clock: &dyn Clock) -> Vec<StepsRecord> {
        filter_series(&self.steps, &self.window, clock)
    }

    pub fn visible_stress(&self, clock: &dyn Clock) -> Vec<StressRecord> {
        filter_series(&self.stress, &self.window, clock)
    }

    pub fn visible_exercise(&self, clock: &dyn Clock) -> Vec<ExerciseRecord> {
        filter_series(&self.exercise, &self.window, clock)
    }

    pub fn visible_sleep(&self, clock: &dyn Clock) -> Vec<SleepRecord> {
        filter_series(&self.sleep, &self.window, clock)
    }

    pub fn visible_summary(&self, clock: &dyn Clock) -> Vec<SummaryRecord> {
        filter_series(&self.summary, &self.window, clock)
    }

    /// Compute the filtered view of every metric
    pub fn view(&self, clock: &dyn Clock) -> DashboardView {
        DashboardView {
            window: self.window.describe(),
            steps: self.visible_steps(clock),
            stress: self.visible_stress(clock),
            exercise: self.visible_exercise(clock),
            sleep: self.visible_sleep(clock),
            summary: self.visible_summary(clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use serde_json::json;

    fn clock() -> FixedClock {
        FixedClock::parse("2025-06-10").unwrap()
    }

    fn loaded() -> Dashboard {
        let mut dashboard = Dashboard::new(ActiveWindow::unbounded());
        dashboard.load(
            Metric::Steps,
            &json!([
                {"date": "2025-06-10", "steps": 9000, "step_goal": 10000},
                {"date": "2025-06-01", "steps": 3000, "step_goal": 10000}
            ]),
        );
        dashboard.load(
            Metric::Sleep,
            &json!([{"date": "2025-06-09", "total_sleep_hours": 7.0}]),
        );
        dashboard
    }

    #[test]
    fn test_window_change_keeps_stored_series() {
        let mut dashboard = loaded();
        assert_eq!(dashboard.visible_steps(&clock()).len(), 2);

        dashboard.set_window(ActiveWindow::last_days(3));
        assert_eq!(dashboard.visible_steps(&clock()).len(), 1);
        assert_eq!(dashboard.steps().len(), 2);

        dashboard.set_window(ActiveWindow::unbounded());
        assert_eq!(dashboard.visible_steps(&clock()).len(), 2);
    }

    #[test]
    fn test_load_replaces_series_wholesale() {
        let mut dashboard = loaded();
        dashboard.load(
            Metric::Steps,
            &json!([{"date": "2025-06-05", "steps": 1, "step_goal": 10}]),
        );
        assert_eq!(dashboard.steps().len(), 1);
        assert_eq!(dashboard.steps()[0].date, "2025-06-05");
        assert_eq!(dashboard.sleep().len(), 1);
    }

    #[test]
    fn test_view_is_repeatable() {
        let dashboard = loaded();
        let first = dashboard.view(&clock());
        let second = dashboard.view(&clock());
        assert_eq!(first, second);
        assert_eq!(first.window, "all");
        assert!(first.stress.is_empty());
        assert_eq!(first.sleep.len(), 1);
    }
}
