//! Health Series - chart-ready series from daily wearable health metrics
//!
//! Health Series turns loosely-typed per-day rows from a personal health data
//! backend into deterministic series through a pure pipeline:
//! lenient decode → metric normalization → chronological sort → range filter.
//!
//! ## Modules
//!
//! - **Metrics**: steps, stress, exercise, sleep and daily summary normalizers
//! - **Window**: relative and explicit date-range filtering against a [`Clock`]
//! - **Dashboard**: stored series plus active window, with derived views

pub mod clock;
pub mod coerce;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod sort;
pub mod types;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use coerce::{coerce, to_day_key};
pub use config::Config;
pub use dashboard::{Dashboard, DashboardView};
pub use error::SeriesError;
pub use pipeline::{
    build_exercise_series, build_series, build_sleep_series, build_steps_series,
    build_stress_series, build_summary_series, series_from_json, SeriesProcessor,
};
pub use report::SeriesReport;
pub use sort::sort_chronologically;
pub use types::{
    DailyRecord, ExerciseRecord, Metric, SleepRecord, StepsRecord, StressRecord, SummaryRecord,
};
pub use window::{filter_series, ActiveWindow, Lookback};

/// Crate version, reported by the CLI
pub const SERIES_VERSION: &str = env!("CARGO_PKG_VERSION");
