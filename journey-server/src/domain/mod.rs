//! Domain types for the travel guide.
//!
//! Places, coordinates and money. Types that can be invalid enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod amount;
mod coordinate;
mod place;

pub use amount::{Amount, InvalidAmount};
pub use coordinate::Coordinate;
pub use place::{GeoPoint, InvalidCategory, PlaceCategory};
