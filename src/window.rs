//! Active window and range filtering
//!
//! The active window is either relative (the last N days, or everything) or an
//! explicit start/end pair of day keys. Filtering is a pure projection: the
//! stored series is never touched, only a filtered copy is returned.

use crate::clock::{Clock, DAY_KEY_FORMAT};
use crate::error::SeriesError;
use crate::types::DailyRecord;
use chrono::Days;

/// Relative window length used when nothing else is configured
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// How far back a relative window reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    Days(u32),
    Unbounded,
}

/// The date range currently governing which records are visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveWindow {
    Relative(Lookback),
    Explicit {
        start: Option<String>,
        end: Option<String>,
    },
}

impl Default for ActiveWindow {
    fn default() -> Self {
        ActiveWindow::last_days(DEFAULT_WINDOW_DAYS)
    }
}

impl ActiveWindow {
    /// Records from the last `days` days, counting back from today
    pub fn last_days(days: u32) -> Self {
        ActiveWindow::Relative(Lookback::Days(days))
    }

    /// Every record, no filtering
    pub fn unbounded() -> Self {
        ActiveWindow::Relative(Lookback::Unbounded)
    }

    /// Records between two day keys, either side optional
    pub fn between(start: Option<&str>, end: Option<&str>) -> Self {
        ActiveWindow::Explicit {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    /// Like [`ActiveWindow::between`], but rejects reversed bounds
    pub fn checked_between(start: Option<&str>, end: Option<&str>) -> Result<Self, SeriesError> {
        if let (Some(s), Some(e)) = (start, end) {
            if !s.is_empty() && !e.is_empty() && s > e {
                return Err(SeriesError::InvalidWindow(format!(
                    "start {s} is after end {e}"
                )));
            }
        }
        Ok(ActiveWindow::between(start, end))
    }

    /// Explicit bounds, when the window is in explicit mode.
    ///
    /// An explicit window with neither bound set is not in explicit mode.
    fn explicit_bounds(&self) -> Option<(&str, &str)> {
        match self {
            ActiveWindow::Explicit { start, end } => {
                let start = start.as_deref().unwrap_or("");
                let end = end.as_deref().unwrap_or("");
                (!start.is_empty() || !end.is_empty()).then_some((start, end))
            }
            ActiveWindow::Relative(_) => None,
        }
    }

    /// Short description for logs and reports
    pub fn describe(&self) -> String {
        if let Some((start, end)) = self.explicit_bounds() {
            let start = if start.is_empty() { "…" } else { start };
            let end = if end.is_empty() { "…" } else { end };
            return format!("{start}..{end}");
        }
        match self {
            ActiveWindow::Relative(Lookback::Days(days)) => format!("last {days} days"),
            _ => "all".to_string(),
        }
    }
}

/// Project a series onto the active window.
///
/// - explicit mode keeps dated records with `start <= date <= end`, an empty
///   bound being open
/// - `Lookback::Unbounded` keeps everything, undated records included
/// - `Lookback::Days(n)` keeps dated records on or after `today - n days`
pub fn filter_series<R: DailyRecord>(
    records: &[R],
    window: &ActiveWindow,
    clock: &dyn Clock,
) -> Vec<R> {
    if records.is_empty() {
        return Vec::new();
    }

    if let Some((start, end)) = window.explicit_bounds() {
        let kept: Vec<R> = records
            .iter()
            .filter(|r| {
                let date = r.date();
                !date.is_empty()
                    && (start.is_empty() || date >= start)
                    && (end.is_empty() || date <= end)
            })
            .cloned()
            .collect();
        tracing::debug!(start, end, kept = kept.len(), total = records.len(), "explicit range filter");
        return kept;
    }

    let days = match window {
        ActiveWindow::Relative(Lookback::Days(days)) => *days,
        _ => return records.to_vec(),
    };

    let Some(cutoff_day) = clock.today().checked_sub_days(Days::new(u64::from(days))) else {
        // Cutoff before the start of the calendar: every dated record qualifies
        return records.iter().filter(|r| !r.date().is_empty()).cloned().collect();
    };
    let cutoff = cutoff_day.format(DAY_KEY_FORMAT).to_string();

    let kept: Vec<R> = records
        .iter()
        .filter(|r| !r.date().is_empty() && r.date() >= cutoff.as_str())
        .cloned()
        .collect();
    tracing::debug!(%cutoff, days, kept = kept.len(), total = records.len(), "relative range filter");
    kept
}
