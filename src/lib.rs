//! # trip-view
//!
//! Turns a live bus trip (scheduled, estimated and actual stop times plus the
//! vehicle's GPS fix) into a view model a map client can draw directly.
//!
//! The core is synchronous and pure:
//!
//! - [`time`] minute arithmetic and timestamp validation
//! - [`status`] per-stop on-time/early/delayed/skipped classification
//! - [`trip`] normalization of the upstream payload into [`TripData`]
//! - [`vehicle`] live/outdated classification of the GPS fix
//!
//! [`fetch`] and [`server`] wrap it with an upstream HTTP client and a JSON
//! service.
//!
//! ## Example
//!
//! ```
//! use trip_view::{map_trip_data, Thresholds, TripResponse};
//!
//! let payload = r#"{
//!     "description": {
//!         "route_number": "E1",
//!         "calendar_date": "2025-05-05",
//!         "is_cancelled": false
//!     },
//!     "route": [],
//!     "vehicle": {
//!         "gps": {
//!             "latitude": 55.95,
//!             "longitude": -3.19,
//!             "last_updated": "2025-05-05T10:00:00Z",
//!             "heading": 90.0
//!         }
//!     }
//! }"#;
//! let response: TripResponse = serde_json::from_str(payload).unwrap();
//!
//! let trip = map_trip_data(response, &Thresholds::default());
//! assert_eq!(trip.title, "Route E1 - 2025-05-05");
//! assert!(trip.stops.is_empty());
//! assert!(trip.next_stop().is_none());
//! ```

pub mod config;
mod error;
pub mod fetch;
pub mod model;
pub mod server;
pub mod status;
pub mod time;
pub mod trip;
pub mod vehicle;

pub use self::config::Thresholds;
pub use self::error::{Error, Result};
pub use self::fetch::TripClient;
pub use self::model::*;
pub use self::status::StopStatus;
pub use self::trip::map_trip_data;
pub use self::vehicle::{vehicle_info, Freshness, Progress, VehicleInfo};
