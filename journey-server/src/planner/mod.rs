//! Trip planning.
//!
//! Answers: "how far is it from here to there, and what should the map
//! show?" Distances are straight-line (haversine) between catalog places.
//! Resolution is a pure function of the query and the catalog.

mod config;
mod distance;
mod map;
mod resolve;

pub use config::MapConfig;
pub use distance::{EARTH_RADIUS_KM, distance_between, distance_km, haversine_km};
pub use map::{MapView, Marker, MarkerKind, build_map_view};
pub use resolve::{TripQuery, TripResult, resolve, resolve_query};
