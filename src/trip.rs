//! Normalization of the upstream trip payload into [`TripData`].

use tracing::debug;

use crate::config::Thresholds;
use crate::model::{RoutePoint, RouteStop, TripData, TripResponse};
use crate::status::StopStatus;

/// Builds the view model for one trip.
///
/// Stops keep their upstream order and are numbered from 1. The first stop
/// with no actual arrival that was not skipped is flagged as the next stop;
/// if every stop has been served or skipped none is flagged. Never fails: an
/// empty route yields empty `stops` and `path`.
#[must_use]
pub fn map_trip_data(response: TripResponse, thresholds: &Thresholds) -> TripData {
    let TripResponse { description, route, vehicle } = response;

    let (stops, found_next_stop) = route.iter().enumerate().fold(
        (Vec::with_capacity(route.len()), false),
        |(mut stops, found_next_stop), (idx, point)| {
            let is_next_stop = !found_next_stop && !point.arrival.has_actual() && !point.skipped;
            stops.push(route_stop(idx + 1, point, is_next_stop, thresholds));
            (stops, found_next_stop || is_next_stop)
        },
    );

    let path = route.iter().map(RoutePoint::geo_point).collect();

    debug!(
        route_number = %description.route_number,
        stops = stops.len(),
        complete = !found_next_stop,
        "mapped trip data"
    );

    TripData {
        title: format!("Route {} - {}", description.route_number, description.calendar_date),
        is_cancelled: description.is_cancelled,
        vehicle,
        stops,
        path,
    }
}

fn route_stop(
    stop_number: usize, point: &RoutePoint, is_next_stop: bool, thresholds: &Thresholds,
) -> RouteStop {
    let status =
        StopStatus::classify(&point.arrival, point.skipped, thresholds.on_time_window_minutes);

    RouteStop {
        stop_number,
        name: point.location.name.clone(),
        location: point.geo_point(),
        arrival: point.arrival.clone(),
        departure: point.departure.clone(),
        bus_status: status.into(),
        allow_boarding: point.allow_boarding,
        allow_drop_off: point.allow_drop_off,
        is_next_stop,
    }
}
