//! Upstream trip payload and the view model derived from it.

use serde::{Deserialize, Serialize};

// ============================================================================
// Upstream payload
// ============================================================================

/// Trip as returned by the upstream trips API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResponse {
    pub description: RouteDescription,
    #[serde(default)]
    pub route: Vec<RoutePoint>,
    pub vehicle: Vehicle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescription {
    pub route_number: String,
    /// Service day, `YYYY-MM-DD`.
    pub calendar_date: String,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default)]
    pub pattern_id: Option<i64>,
    #[serde(default)]
    pub route_id: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// One scheduled stop on the route, in travel order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    #[serde(default)]
    pub id: Option<i64>,
    pub location: Location,
    pub arrival: ScheduledTime,
    pub departure: ScheduledTime,
    #[serde(default)]
    pub skipped: bool,
    #[serde(default)]
    pub allow_boarding: bool,
    #[serde(default)]
    pub allow_drop_off: bool,
    #[serde(default)]
    pub booking_cut_off_mins: Option<i64>,
    #[serde(default)]
    pub pre_booked_only: Option<bool>,
}

impl RoutePoint {
    #[must_use]
    pub const fn geo_point(&self) -> GeoPoint {
        GeoPoint { latitude: self.location.lat, longitude: self.location.lon }
    }
}

/// An arrival or departure event at a stop.
///
/// `estimated` and `actual` fill in as the trip progresses. Values are kept as
/// received; see [`crate::time::parse_timestamp`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTime {
    pub scheduled: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl ScheduledTime {
    /// The event has happened. An empty string counts as not yet.
    #[must_use]
    pub fn has_actual(&self) -> bool {
        self.actual.as_deref().is_some_and(|actual| !actual.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub code_detail: Option<String>,
    #[serde(default)]
    pub detailed_name: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub atco_code: Option<String>,
    #[serde(default)]
    pub has_future_activity: Option<bool>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub zone: Vec<GeoPoint>,
    #[serde(default)]
    pub heading: Option<f64>,
    #[serde(default)]
    pub hub_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Vehicle operating the trip. Passed through to the view model untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub plate_number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub brand: String,
    pub colour: String,
    pub wheelchair: i64,
    pub bicycle: i64,
    pub seat: i64,
    pub has_wifi: bool,
    pub has_toilet: bool,
    pub is_backup_vehicle: bool,
    pub owner_id: i64,
    pub gps: Gps,
}

/// Latest position fix reported by the vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gps {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub heading: f64,
}

impl Gps {
    #[must_use]
    pub const fn geo_point(&self) -> GeoPoint {
        GeoPoint { latitude: self.latitude, longitude: self.longitude }
    }
}

// ============================================================================
// View model
// ============================================================================

/// Normalized trip, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripData {
    pub title: String,
    pub is_cancelled: bool,
    pub vehicle: Vehicle,
    pub stops: Vec<RouteStop>,
    /// Polyline through every stop, in route order, skipped stops included.
    pub path: Vec<GeoPoint>,
}

impl TripData {
    /// The first stop still to be served, if the trip has not finished.
    #[must_use]
    pub fn next_stop(&self) -> Option<&RouteStop> {
        self.stops.iter().find(|stop| stop.is_next_stop)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    /// 1-based position on the route.
    #[serde(rename = "stopNumber")]
    pub stop_number: usize,
    pub name: String,
    pub location: GeoPoint,
    pub arrival: ScheduledTime,
    pub departure: ScheduledTime,
    #[serde(rename = "busStatus")]
    pub bus_status: BusStatus,
    pub allow_boarding: bool,
    pub allow_drop_off: bool,
    pub is_next_stop: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusStatus {
    pub status: StatusLabel,
    pub description: String,
    /// Hex display color, e.g. `#4CAF50`.
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusLabel {
    Past,
    OnTime,
    Early,
    Delayed,
    Unknown,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_and_missing_times_are_absent() {
        let time: ScheduledTime = serde_json::from_value(json!({
            "scheduled": "2025-05-05T10:00:00Z",
            "estimated": null
        }))
        .unwrap();

        assert_eq!(time.estimated, None);
        assert_eq!(time.actual, None);
        assert!(!time.has_actual());
    }

    #[test]
    fn empty_actual_is_not_arrived() {
        let time = ScheduledTime {
            scheduled: "2025-05-05T10:00:00Z".to_string(),
            estimated: None,
            actual: Some(String::new()),
        };
        assert!(!time.has_actual());
    }

    #[test]
    fn status_labels_serialize_kebab_case() {
        assert_eq!(serde_json::to_value(StatusLabel::OnTime).unwrap(), json!("on-time"));
        assert_eq!(serde_json::to_value(StatusLabel::Delayed).unwrap(), json!("delayed"));
    }

    #[test]
    fn sparse_vehicle_defaults() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "plate_number": "SK24 EMB",
            "type": "coach",
            "gps": { "latitude": 55.95, "longitude": -3.19, "last_updated": "2025-05-05T10:00:00Z" }
        }))
        .unwrap();

        assert_eq!(vehicle.kind, "coach");
        assert!(!vehicle.has_wifi);
        assert!((vehicle.gps.heading - 0.0).abs() < f64::EPSILON);
    }
}
