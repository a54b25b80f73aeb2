//! Error types for Health Series
//!
//! The normalization core is total and never returns these. They only surface
//! at the text boundary (decoding provider JSON) and when parsing user input
//! such as metric names or window bounds.

use thiserror::Error;

/// Errors that can occur around the series pipeline
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Date parse error: {0}")]
    DateParseError(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),
}
