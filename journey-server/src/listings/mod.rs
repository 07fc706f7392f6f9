//! Filtering for the accommodation and food listing pages.

mod accommodation;
mod facet;
mod food;

pub use accommodation::{
    AccommodationFilter, MAX_PRICE, MIN_PRICE, PRICE_STEP, kind_options, location_options,
};
pub use facet::{ALL, Facet, facet_options};
pub use food::{DishFilter, category_options, region_options};
