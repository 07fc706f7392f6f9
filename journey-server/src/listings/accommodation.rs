//! Accommodation search.

use crate::catalog::Accommodation;

use super::facet::{Facet, facet_options};

/// Lowest value of the price slider, in rupees.
pub const MIN_PRICE: u32 = 1000;

/// Highest value of the price slider, and the default cap.
pub const MAX_PRICE: u32 = 10_000;

/// Slider step, in rupees.
pub const PRICE_STEP: u32 = 500;

/// Filter over accommodation listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccommodationFilter {
    pub location: Facet,
    pub kind: Facet,
    /// Inclusive nightly price cap in rupees.
    pub max_price: u32,
}

impl Default for AccommodationFilter {
    fn default() -> Self {
        Self {
            location: Facet::All,
            kind: Facet::All,
            max_price: MAX_PRICE,
        }
    }
}

impl AccommodationFilter {
    /// Build a filter from raw query values.
    ///
    /// The price cap is clamped to the slider range and defaults to
    /// [`MAX_PRICE`] when absent, blank or not a number.
    pub fn from_params(location: Option<&str>, kind: Option<&str>, max_price: Option<&str>) -> Self {
        let max_price = max_price
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(MAX_PRICE)
            .clamp(MIN_PRICE, MAX_PRICE);

        Self {
            location: Facet::parse(location),
            kind: Facet::parse(kind),
            max_price,
        }
    }

    /// Whether a single listing passes the filter.
    pub fn matches(&self, acc: &Accommodation) -> bool {
        self.location.matches(acc.location)
            && self.kind.matches(acc.kind)
            && acc.price_per_night <= self.max_price
    }

    /// Listings passing the filter, in catalog order.
    pub fn apply<'a>(&self, listings: &'a [Accommodation]) -> Vec<&'a Accommodation> {
        listings.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Location facet options for the given listings.
pub fn location_options(listings: &[Accommodation]) -> Vec<&'static str> {
    facet_options(listings.iter().map(|a| a.location))
}

/// Accommodation type facet options for the given listings.
pub fn kind_options(listings: &[Accommodation]) -> Vec<&'static str> {
    facet_options(listings.iter().map(|a| a.kind))
}
