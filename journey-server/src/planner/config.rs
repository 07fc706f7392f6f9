//! Map presentation settings for planned trips.

use crate::domain::Coordinate;

/// Configuration for the trip map.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Where the map is centred when no start point is known.
    pub default_center: Coordinate,

    /// Zoom level used with the default centre.
    pub default_zoom: u8,

    /// Zoom level used when centring on a resolved start point.
    pub source_zoom: u8,

    /// Tile URL template handed to the map renderer.
    pub tile_url: String,

    /// Attribution shown under the tiles.
    pub attribution: String,
}

impl MapConfig {
    /// Create a configuration with the given centre and zoom levels,
    /// keeping the default tile source.
    pub fn new(default_center: Coordinate, default_zoom: u8, source_zoom: u8) -> Self {
        Self {
            default_center,
            default_zoom,
            source_zoom,
            ..Self::default()
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: Coordinate::new(30.3165, 78.0322), // Dehradun
            default_zoom: 8,
            source_zoom: 10,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }
}
