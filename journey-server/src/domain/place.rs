//! Named places on the map.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Coordinate;

/// Error returned when parsing an unknown place category label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown place category: {0:?}")]
pub struct InvalidCategory(pub String);

/// The kind of place a catalog entry describes.
///
/// Labels are the human-readable strings shown in the UI, e.g. `"Hill Station"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceCategory {
    City,
    HillStation,
    Spiritual,
    LakeCity,
    Temple,
    SkiResort,
    NationalPark,
}

impl PlaceCategory {
    /// All categories, in display order.
    pub const ALL: [PlaceCategory; 7] = [
        PlaceCategory::City,
        PlaceCategory::HillStation,
        PlaceCategory::Spiritual,
        PlaceCategory::LakeCity,
        PlaceCategory::Temple,
        PlaceCategory::SkiResort,
        PlaceCategory::NationalPark,
    ];

    /// Parse a category from its display label.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_server::domain::PlaceCategory;
    ///
    /// assert_eq!(PlaceCategory::parse("Hill Station").unwrap(), PlaceCategory::HillStation);
    /// assert!(PlaceCategory::parse("hill station").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidCategory> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| InvalidCategory(s.to_string()))
    }

    /// The display label.
    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::City => "City",
            PlaceCategory::HillStation => "Hill Station",
            PlaceCategory::Spiritual => "Spiritual",
            PlaceCategory::LakeCity => "Lake City",
            PlaceCategory::Temple => "Temple",
            PlaceCategory::SkiResort => "Ski Resort",
            PlaceCategory::NationalPark => "National Park",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PlaceCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A named point in the place catalog.
///
/// Both `id` and `name` are unique within a catalog; `name` is the lookup key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub category: PlaceCategory,
}

impl GeoPoint {
    /// Create a new point.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        coordinate: Coordinate,
        category: PlaceCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            coordinate,
            category,
        }
    }
}
