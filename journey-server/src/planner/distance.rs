//! Great-circle distance.
//!
//! The haversine formula gives the distance between two points on a sphere
//! from their latitudes and longitudes. Straight-line only; there is no road
//! network here.

use crate::domain::{Coordinate, GeoPoint};

/// Earth's mean radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Unrounded great-circle distance in kilometres.
///
/// Inputs are not range-checked. Out-of-range degrees still give a defined
/// number, just not a geographically meaningful one.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Near-antipodal rounding can push h just past 1.
    let h = h.min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance rounded to the nearest whole kilometre.
///
/// # Examples
///
/// ```
/// use journey_server::domain::Coordinate;
/// use journey_server::planner::distance_km;
///
/// let dehradun = Coordinate::new(30.3165, 78.0322);
/// let mussoorie = Coordinate::new(30.4598, 78.0644);
/// assert_eq!(distance_km(dehradun, mussoorie), 16);
/// assert_eq!(distance_km(dehradun, dehradun), 0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> u32 {
    // Bounded by half the circumference (~20 015 km), so the cast cannot truncate.
    haversine_km(a, b).round() as u32
}

/// Distance between two catalog points in whole kilometres.
pub fn distance_between(a: &GeoPoint, b: &GeoPoint) -> u32 {
    distance_km(a.coordinate, b.coordinate)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
    }

    proptest! {
        /// distance(a, b) == distance(b, a)
        #[test]
        fn symmetric(a in coordinate(), b in coordinate()) {
            prop_assert_eq!(distance_km(a, b), distance_km(b, a));
        }

        /// distance(a, a) == 0
        #[test]
        fn zero_for_same_point(a in coordinate()) {
            prop_assert_eq!(distance_km(a, a), 0);
        }

        /// Never more than half the Earth's circumference
        #[test]
        fn bounded_by_half_circumference(a in coordinate(), b in coordinate()) {
            let d = haversine_km(a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }

        /// The rounded distance is within half a kilometre of the exact one
        #[test]
        fn rounding_is_nearest(a in coordinate(), b in coordinate()) {
            let exact = haversine_km(a, b);
            let rounded = f64::from(distance_km(a, b));
            prop_assert!((exact - rounded).abs() <= 0.5);
        }
    }
}
