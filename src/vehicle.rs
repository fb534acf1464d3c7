//! Liveness of the vehicle's GPS fix and the info shown on its marker.
//!
//! Computed on demand against a caller-supplied `now`, not at normalization
//! time, so a view model that has been sitting around still reports the
//! age of its fix correctly.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Thresholds;
use crate::model::{GeoPoint, Gps, RouteStop};
use crate::time::{difference_in_minutes, parse_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Live,
    Outdated,
}

/// Marker payload for the vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleInfo {
    pub freshness: Freshness,
    /// Absent when `last_updated` cannot be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_since_update: Option<i64>,
    /// Prompt the user to refresh for a current location.
    pub needs_refresh: bool,
    pub position: GeoPoint,
    pub heading: f64,
    pub progress: Progress,
}

/// Where the vehicle is headed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Progress {
    Approaching {
        name: String,
        location: GeoPoint,
        /// Absent when the stop has no usable estimate. Zero means arriving
        /// now.
        #[serde(skip_serializing_if = "Option::is_none")]
        arrival_in_minutes: Option<i64>,
    },
    TripComplete,
}

/// Classifies the GPS fix and summarizes progress toward `next_stop`.
///
/// A fix aged `stale_after_minutes` or more, or one whose timestamp cannot
/// be read, is outdated.
#[must_use]
pub fn vehicle_info(
    gps: &Gps, next_stop: Option<&RouteStop>, now: DateTime<Utc>, thresholds: &Thresholds,
) -> VehicleInfo {
    let minutes_since_update = parse_timestamp(&gps.last_updated)
        .map(|last_updated| difference_in_minutes(now, last_updated).abs());

    let freshness = match minutes_since_update {
        Some(minutes) if minutes < thresholds.stale_after_minutes => Freshness::Live,
        _ => Freshness::Outdated,
    };

    let progress = next_stop.map_or(Progress::TripComplete, |stop| Progress::Approaching {
        name: stop.name.clone(),
        location: stop.location,
        arrival_in_minutes: stop
            .arrival
            .estimated
            .as_deref()
            .and_then(parse_timestamp)
            .map(|estimated| difference_in_minutes(now, estimated).abs()),
    });

    VehicleInfo {
        freshness,
        minutes_since_update,
        needs_refresh: freshness == Freshness::Outdated,
        position: gps.geo_point(),
        heading: gps.heading,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{BusStatus, ScheduledTime, StatusLabel};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 5, 10, 0, 0).unwrap()
    }

    fn gps(last_updated: &str) -> Gps {
        Gps {
            latitude: 51.5074,
            longitude: -0.1278,
            last_updated: last_updated.to_string(),
            heading: 0.0,
        }
    }

    fn next_stop(estimated: Option<&str>) -> RouteStop {
        RouteStop {
            stop_number: 1,
            name: "Test Stop".to_string(),
            location: GeoPoint { latitude: 51.5075, longitude: -0.1279 },
            arrival: ScheduledTime {
                scheduled: "2025-05-05T10:15:00Z".to_string(),
                estimated: estimated.map(str::to_string),
                actual: None,
            },
            departure: ScheduledTime {
                scheduled: "2025-05-05T10:20:00Z".to_string(),
                estimated: None,
                actual: None,
            },
            bus_status: BusStatus {
                status: StatusLabel::OnTime,
                description: "On Time".to_string(),
                color: "#4CAF50".to_string(),
            },
            allow_boarding: true,
            allow_drop_off: true,
            is_next_stop: true,
        }
    }

    #[test]
    fn recent_fix_is_live() {
        let info = vehicle_info(&gps("2025-05-05T09:58:00Z"), None, now(), &Thresholds::default());
        assert_eq!(info.freshness, Freshness::Live);
        assert_eq!(info.minutes_since_update, Some(2));
        assert!(!info.needs_refresh);
    }

    #[test]
    fn old_fix_is_outdated() {
        let info = vehicle_info(&gps("2025-05-05T09:50:00Z"), None, now(), &Thresholds::default());
        assert_eq!(info.freshness, Freshness::Outdated);
        assert_eq!(info.minutes_since_update, Some(10));
        assert!(info.needs_refresh);
    }

    #[test]
    fn five_minutes_is_outdated() {
        let info = vehicle_info(&gps("2025-05-05T09:55:00Z"), None, now(), &Thresholds::default());
        assert_eq!(info.freshness, Freshness::Outdated);

        let info = vehicle_info(&gps("2025-05-05T09:55:31Z"), None, now(), &Thresholds::default());
        assert_eq!(info.freshness, Freshness::Live);
    }

    #[test]
    fn unreadable_fix_is_outdated() {
        let info = vehicle_info(&gps("yesterday"), None, now(), &Thresholds::default());
        assert_eq!(info.freshness, Freshness::Outdated);
        assert_eq!(info.minutes_since_update, None);
    }

    #[test]
    fn approaching_next_stop() {
        let stop = next_stop(Some("2025-05-05T10:16:00Z"));
        let info =
            vehicle_info(&gps("2025-05-05T09:58:00Z"), Some(&stop), now(), &Thresholds::default());

        assert_eq!(
            info.progress,
            Progress::Approaching {
                name: "Test Stop".to_string(),
                location: GeoPoint { latitude: 51.5075, longitude: -0.1279 },
                arrival_in_minutes: Some(16),
            }
        );
    }

    #[test]
    fn arriving_now_is_zero_not_absent() {
        let stop = next_stop(Some("2025-05-05T10:00:20Z"));
        let info =
            vehicle_info(&gps("2025-05-05T09:58:00Z"), Some(&stop), now(), &Thresholds::default());

        let Progress::Approaching { arrival_in_minutes, .. } = info.progress else {
            panic!("expected approaching");
        };
        assert_eq!(arrival_in_minutes, Some(0));
    }

    #[test]
    fn missing_estimate_omits_arrival() {
        for estimated in [None, Some(""), Some("later")] {
            let stop = next_stop(estimated);
            let info = vehicle_info(
                &gps("2025-05-05T09:58:00Z"),
                Some(&stop),
                now(),
                &Thresholds::default(),
            );

            let value = serde_json::to_value(&info).unwrap();
            assert_eq!(value["progress"]["state"], json!("approaching"));
            assert_eq!(value["progress"]["name"], json!("Test Stop"));
            assert!(value["progress"].get("arrival_in_minutes").is_none());
        }
    }

    #[test]
    fn no_next_stop_is_trip_complete() {
        let info = vehicle_info(&gps("2025-05-05T09:58:00Z"), None, now(), &Thresholds::default());
        assert_eq!(info.progress, Progress::TripComplete);

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            json!({
                "freshness": "live",
                "minutes_since_update": 2,
                "needs_refresh": false,
                "position": { "latitude": 51.5074, "longitude": -0.1278 },
                "heading": 0.0,
                "progress": { "state": "trip_complete" }
            })
        );
    }

    #[test]
    fn stale_threshold_is_configurable() {
        let thresholds = Thresholds { stale_after_minutes: 15, ..Thresholds::default() };
        let info = vehicle_info(&gps("2025-05-05T09:50:00Z"), None, now(), &thresholds);
        assert_eq!(info.freshness, Freshness::Live);
    }
}
