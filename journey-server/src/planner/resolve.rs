//! Trip query resolution.
//!
//! Turns a pair of place names into a [`TripResult`]: both endpoints looked
//! up in the catalog, the straight-line distance between them, and the route
//! line to draw. An unknown name is not an error; the endpoint is simply
//! absent and no distance or route is produced.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::guide::{ATTRACTIONS, DINING, LODGING};
use crate::catalog::{Attraction, Dining, Lodging, PlaceCatalog};
use crate::domain::{Coordinate, GeoPoint};

use super::distance::distance_between;

/// A user's trip request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    pub source_name: String,
    pub destination_name: String,
    pub travel_date: NaiveDate,
}

impl TripQuery {
    /// Create a new query.
    pub fn new(
        source_name: impl Into<String>,
        destination_name: impl Into<String>,
        travel_date: NaiveDate,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            destination_name: destination_name.into(),
            travel_date,
        }
    }
}

/// The resolved form of a trip query.
///
/// `distance_km` is `Some` exactly when both `source` and `destination` are
/// `Some`, and `route_line` is then `[source, destination]`; otherwise it is
/// empty.
///
/// Attractions, lodging and dining are the same static lists for every trip.
/// They are not filtered by proximity to the route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripResult<'a> {
    pub source: Option<&'a GeoPoint>,
    pub destination: Option<&'a GeoPoint>,
    pub distance_km: Option<u32>,
    pub route_line: Vec<Coordinate>,
    pub attractions: &'static [Attraction],
    pub lodging: &'static [Lodging],
    pub dining: &'static [Dining],
}

impl TripResult<'_> {
    /// Whether both endpoints resolved, so a route can be drawn.
    pub fn has_route(&self) -> bool {
        !self.route_line.is_empty()
    }
}

/// Resolve a source and destination name against the catalog.
///
/// Lookup is exact and case-sensitive. This never fails: a name that is not
/// in the catalog leaves that endpoint as `None`.
pub fn resolve<'a>(
    source_name: &str,
    destination_name: &str,
    catalog: &'a PlaceCatalog,
) -> TripResult<'a> {
    let source = catalog.find(source_name);
    let destination = catalog.find(destination_name);

    let (distance_km, route_line) = match (source, destination) {
        (Some(s), Some(d)) => (
            Some(distance_between(s, d)),
            vec![s.coordinate, d.coordinate],
        ),
        _ => (None, Vec::new()),
    };

    tracing::debug!(
        source = source_name,
        destination = destination_name,
        ?distance_km,
        "resolved trip"
    );

    TripResult {
        source,
        destination,
        distance_km,
        route_line,
        attractions: ATTRACTIONS,
        lodging: LODGING,
        dining: DINING,
    }
}

/// Resolve a [`TripQuery`]. The travel date does not affect the result.
pub fn resolve_query<'a>(query: &TripQuery, catalog: &'a PlaceCatalog) -> TripResult<'a> {
    resolve(&query.source_name, &query.destination_name, catalog)
}
