//! Geographic coordinates.

use std::fmt;

use serde::Serialize;

/// A latitude/longitude pair in decimal degrees.
///
/// No range validation is performed: values outside `[-90, 90]` and
/// `[-180, 180]` are carried through unchanged. The catalog only ever
/// contains real points, and distance maths is defined for any finite pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `[latitude, longitude]`, the order map libraries expect.
    pub fn as_pair(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    /// Returns `(latitude, longitude)` converted to radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_pair_is_lat_first() {
        let c = Coordinate::new(30.3165, 78.0322);
        assert_eq!(c.as_pair(), [30.3165, 78.0322]);
    }

    #[test]
    fn to_radians() {
        let (lat, lon) = Coordinate::new(180.0, -90.0).to_radians();
        assert!((lat - std::f64::consts::PI).abs() < 1e-12);
        assert!((lon + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn display() {
        let c = Coordinate::new(30.45981, 78.0644);
        assert_eq!(c.to_string(), "30.4598, 78.0644");
    }

    #[test]
    fn serializes_as_object() {
        let json = serde_json::to_string(&Coordinate::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":-2.0}"#);
    }
}
