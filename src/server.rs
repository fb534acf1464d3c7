//! JSON service for the map client.
//!
//! - `GET /health`
//! - `GET /trips/{trip_id}` normalized trip
//! - `GET /trips/{trip_id}/vehicle` vehicle marker info, aged at request time

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::Thresholds;
use crate::fetch::TripClient;
use crate::model::TripData;
use crate::vehicle::{vehicle_info, VehicleInfo};

pub const NO_DATA: &str = "No route data available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Clone)]
pub struct AppState {
    pub client: TripClient,
    pub thresholds: Thresholds,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/trips/{trip_id}", get(get_trip))
        .route("/trips/{trip_id}/vehicle", get(get_vehicle))
        .layer(cors)
        .with_state(state)
}

/// Serves the router until the listener fails.
///
/// # Errors
///
/// Returns the listener's I/O error.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "server is running");
    }
    axum::serve(listener, router(state)).await
}

async fn health_check() -> &'static str {
    "OK"
}

async fn get_trip(
    State(state): State<AppState>, Path(trip_id): Path<String>,
) -> Result<Json<TripData>, ApiError> {
    let trip = load_trip(&state, &trip_id).await?;
    info!(trip_id = %trip_id, stops = trip.stops.len(), "serving trip");
    Ok(Json(trip))
}

async fn get_vehicle(
    State(state): State<AppState>, Path(trip_id): Path<String>,
) -> Result<Json<VehicleInfo>, ApiError> {
    let trip = load_trip(&state, &trip_id).await?;
    let info = vehicle_info(&trip.vehicle.gps, trip.next_stop(), Utc::now(), &state.thresholds);
    info!(trip_id = %trip_id, freshness = ?info.freshness, "serving vehicle info");
    Ok(Json(info))
}

async fn load_trip(state: &AppState, trip_id: &str) -> Result<TripData, ApiError> {
    state.client.trip_data(trip_id, &state.thresholds).await.ok_or_else(|| {
        (StatusCode::NOT_FOUND, Json(ErrorResponse { error: NO_DATA.to_string() }))
    })
}
