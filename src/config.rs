//! Classification thresholds and service defaults.

/// Estimates within this many minutes of the schedule count as on time.
pub const ON_TIME_WINDOW_MINUTES: i64 = 1;

/// A GPS fix this many minutes old (or older) is outdated.
pub const STALE_AFTER_MINUTES: i64 = 5;

/// Upstream trips API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.ember.to/v1";

pub const DEFAULT_PORT: u16 = 3030;

/// Tunable bands used by the status and freshness classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub on_time_window_minutes: i64,
    pub stale_after_minutes: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            on_time_window_minutes: ON_TIME_WINDOW_MINUTES,
            stale_after_minutes: STALE_AFTER_MINUTES,
        }
    }
}
