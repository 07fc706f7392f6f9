//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::GeoPoint;
use crate::planner::{MapView, TripResult};

/// Trip planner query string.
#[derive(Debug, Default, Deserialize)]
pub struct TripParams {
    /// Starting place name
    pub source: Option<String>,

    /// Destination place name
    pub destination: Option<String>,

    /// Travel date, YYYY-MM-DD
    pub date: Option<String>,
}

impl TripParams {
    /// Source name, empty if absent.
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or_default()
    }

    /// Destination name, empty if absent.
    pub fn destination(&self) -> &str {
        self.destination.as_deref().unwrap_or_default()
    }

    /// Parse the travel date.
    ///
    /// Returns `Ok(None)` when no date was given.
    pub fn travel_date(&self) -> Result<Option<NaiveDate>, String> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| format!("Invalid travel date: {raw}")),
        }
    }
}

/// Accommodation listing query string.
#[derive(Debug, Default, Deserialize)]
pub struct AccommodationParams {
    pub location: Option<String>,
    pub kind: Option<String>,
    /// Kept as text so a malformed value falls back to the default cap
    pub max_price: Option<String>,
}

/// Food guide query string.
#[derive(Debug, Default, Deserialize)]
pub struct FoodParams {
    /// Search term
    pub q: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
}

/// New expense form.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    pub category: String,
    pub amount: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

/// Response listing the place catalog.
#[derive(Debug, Serialize)]
pub struct PlacesResponse<'a> {
    pub places: Vec<&'a GeoPoint>,
}

/// Response for a trip query.
#[derive(Debug, Serialize)]
pub struct TripResponse<'a> {
    /// Travel date, if one was given
    pub travel_date: Option<NaiveDate>,

    /// The resolved trip
    #[serde(flatten)]
    pub trip: TripResult<'a>,

    /// What to draw on the map
    pub map: MapView,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
