//! Runtime configuration
//!
//! Read from the environment. Every value has a default and bad values fall
//! back to it rather than failing.

use crate::window::{ActiveWindow, DEFAULT_WINDOW_DAYS};

/// Env var holding the default relative window (`30`, `7`, `all`, ...)
pub const ENV_DEFAULT_DAYS: &str = "HEALTH_SERIES_DEFAULT_DAYS";
/// Env var overriding the log filter
pub const ENV_LOG: &str = "HEALTH_SERIES_LOG";
/// Log filter used when neither `HEALTH_SERIES_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "health_series=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Window applied when the caller does not pick one
    pub default_window: ActiveWindow,
    /// Filter directive for the log subscriber
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_window: ActiveWindow::last_days(DEFAULT_WINDOW_DAYS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_window = lookup(ENV_DEFAULT_DAYS)
            .and_then(|s| parse_window_days(&s))
            .unwrap_or(defaults.default_window);

        let log_filter = lookup(ENV_LOG)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            default_window,
            log_filter,
        }
    }
}

fn parse_window_days(value: &str) -> Option<ActiveWindow> {
    match value.trim().to_ascii_lowercase().as_str() {
        "all" | "unbounded" => Some(ActiveWindow::unbounded()),
        other => other.parse::<u32>().ok().map(ActiveWindow::last_days),
    }
}
