//! Clock capability
//!
//! The relative range filter needs "today". It asks a [`Clock`] instead of
//! reading the wall clock, so tests and replays can pin the date.

use crate::error::SeriesError;
use chrono::{Local, NaiveDate};

/// Format of a canonical day key
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Source of the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, in the machine's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Pin the clock to a `YYYY-MM-DD` date
    pub fn parse(day: &str) -> Result<Self, SeriesError> {
        NaiveDate::parse_from_str(day.trim(), DAY_KEY_FORMAT)
            .map(FixedClock)
            .map_err(|e| SeriesError::DateParseError(format!("{day}: {e}")))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
