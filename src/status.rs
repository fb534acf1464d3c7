//! Per-stop arrival status.

use crate::model::{BusStatus, ScheduledTime, StatusLabel};
use crate::time::{difference_in_minutes, parse_timestamp};

pub const GRAY: &str = "#808080";
pub const GREEN: &str = "#4CAF50";
pub const BLUE: &str = "#2196F3";
pub const RED: &str = "#F44336";

/// Arrival status of a single stop.
///
/// `Early` and `Delayed` carry the absolute deviation in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopStatus {
    Skipped,
    Unknown,
    Past,
    OnTime,
    Early(i64),
    Delayed(i64),
}

impl StopStatus {
    /// Classifies a stop from its arrival times and skip flag.
    ///
    /// Rules are checked in order and the first match wins: a skipped stop is
    /// always `Skipped`, a missing or unparseable estimate (or schedule) is
    /// `Unknown` even when the bus has already arrived, and only then does an
    /// actual arrival make the stop `Past`. Otherwise the estimate is compared
    /// with the schedule; deviations within `on_time_window` minutes are
    /// `OnTime`.
    #[must_use]
    pub fn classify(arrival: &ScheduledTime, skipped: bool, on_time_window: i64) -> Self {
        if skipped {
            return Self::Skipped;
        }

        let Some(estimated) = arrival.estimated.as_deref().and_then(parse_timestamp) else {
            return Self::Unknown;
        };
        let Some(scheduled) = parse_timestamp(&arrival.scheduled) else {
            return Self::Unknown;
        };

        if arrival.has_actual() {
            return Self::Past;
        }

        let diff = difference_in_minutes(scheduled, estimated);
        let minutes = diff.abs();

        if minutes <= on_time_window {
            Self::OnTime
        } else if diff > 0 {
            Self::Early(minutes)
        } else {
            Self::Delayed(minutes)
        }
    }

    #[must_use]
    pub const fn label(&self) -> StatusLabel {
        match self {
            Self::Skipped | Self::Past => StatusLabel::Past,
            Self::Unknown => StatusLabel::Unknown,
            Self::OnTime => StatusLabel::OnTime,
            Self::Early(_) => StatusLabel::Early,
            Self::Delayed(_) => StatusLabel::Delayed,
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Skipped => "Skipped".to_string(),
            Self::Unknown => "TBD".to_string(),
            Self::Past => "Past".to_string(),
            Self::OnTime => "On Time".to_string(),
            Self::Early(minutes) => format!("{minutes} minutes early"),
            Self::Delayed(minutes) => format!("{minutes} minutes late"),
        }
    }

    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Skipped | Self::Unknown | Self::Past => GRAY,
            Self::OnTime => GREEN,
            Self::Early(_) => BLUE,
            Self::Delayed(_) => RED,
        }
    }
}

impl From<StopStatus> for BusStatus {
    fn from(status: StopStatus) -> Self {
        Self {
            status: status.label(),
            description: status.description(),
            color: status.color().to_string(),
        }
    }
}
