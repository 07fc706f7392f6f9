//! Read-only catalogs compiled into the server.
//!
//! The place catalog backs trip planning; the guide tables back the
//! listing pages and the points of interest drawn on every trip map.

pub mod guide;
mod places;

pub use guide::{Accommodation, Attraction, Destination, Dining, Dish, Lodging};
pub use places::{PlaceCatalog, PlaceCatalogBuilder, uttarakhand_places};
