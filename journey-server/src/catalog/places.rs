//! The place catalog used by the trip planner.
//!
//! A fixed, ordered list of named points. Names and ids are unique, so a
//! name lookup resolves to at most one place.

use std::collections::HashMap;

use crate::domain::{Coordinate, GeoPoint, PlaceCategory};

/// An immutable, ordered collection of places.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    places: Vec<GeoPoint>,
    /// Name -> index into `places`.
    by_name: HashMap<String, usize>,
}

impl PlaceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a place by exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<&GeoPoint> {
        self.by_name.get(name).map(|&i| &self.places[i])
    }

    /// Look up a place by id.
    pub fn get(&self, id: u32) -> Option<&GeoPoint> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Iterate over places in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &GeoPoint> {
        self.places.iter()
    }

    /// Place names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.places.iter().map(|p| p.name.as_str()).collect()
    }

    /// Returns the number of places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns true if there are no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Add a place, keeping the first entry for any repeated name or id.
    ///
    /// Returns false if the place was rejected as a duplicate.
    fn insert(&mut self, point: GeoPoint) -> bool {
        if self.by_name.contains_key(&point.name) || self.get(point.id).is_some() {
            return false;
        }
        self.by_name.insert(point.name.clone(), self.places.len());
        self.places.push(point);
        true
    }
}

/// Builder for a place catalog.
#[derive(Debug, Default)]
pub struct PlaceCatalogBuilder {
    inner: PlaceCatalog,
}

impl PlaceCatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a place.
    ///
    /// Entries with an unknown category label, or whose name or id is
    /// already present, are skipped.
    pub fn add(mut self, id: u32, name: &str, lat: f64, lng: f64, category: &str) -> Self {
        match PlaceCategory::parse(category) {
            Ok(category) => {
                let point = GeoPoint::new(id, name, Coordinate::new(lat, lng), category);
                if !self.inner.insert(point) {
                    tracing::warn!(id, name, "skipping duplicate catalog entry");
                }
            }
            Err(e) => tracing::warn!(id, name, error = %e, "skipping catalog entry"),
        }
        self
    }

    /// Build the catalog.
    pub fn build(self) -> PlaceCatalog {
        self.inner
    }
}

/// The Uttarakhand places offered as trip start and end points.
pub fn uttarakhand_places() -> PlaceCatalog {
    PlaceCatalogBuilder::new()
        .add(1, "Dehradun", 30.3165, 78.0322, "City")
        .add(2, "Mussoorie", 30.4598, 78.0644, "Hill Station")
        .add(3, "Rishikesh", 30.0869, 78.2676, "Spiritual")
        .add(4, "Haridwar", 29.9457, 78.1642, "Spiritual")
        .add(5, "Nainital", 29.3919, 79.4542, "Lake City")
        .add(6, "Almora", 29.5892, 79.6467, "Hill Station")
        .add(7, "Kedarnath", 30.7346, 79.0669, "Temple")
        .add(8, "Badrinath", 30.7433, 79.4938, "Temple")
        .add(9, "Auli", 30.5417, 79.5666, "Ski Resort")
        .add(10, "Jim Corbett", 29.5300, 78.7747, "National Park")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog() {
        let catalog = PlaceCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.find("Dehradun").is_none());
    }

    #[test]
    fn uttarakhand_catalog_contents() {
        let catalog = uttarakhand_places();
        assert_eq!(catalog.len(), 10);

        let dehradun = catalog.find("Dehradun").unwrap();
        assert_eq!(dehradun.id, 1);
        assert_eq!(dehradun.coordinate, Coordinate::new(30.3165, 78.0322));
        assert_eq!(dehradun.category, PlaceCategory::City);

        let corbett = catalog.get(10).unwrap();
        assert_eq!(corbett.name, "Jim Corbett");
        assert_eq!(corbett.category, PlaceCategory::NationalPark);
    }

    #[test]
    fn names_in_catalog_order() {
        let catalog = uttarakhand_places();
        let names = catalog.names();
        assert_eq!(names.first(), Some(&"Dehradun"));
        assert_eq!(names.last(), Some(&"Jim Corbett"));
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let catalog = uttarakhand_places();
        assert!(catalog.find("dehradun").is_none());
        assert!(catalog.find("Dehradun ").is_none());
        assert!(catalog.find("Jim Corbett").is_some());
    }

    #[test]
    fn builder_skips_duplicates_keeping_first() {
        let catalog = PlaceCatalogBuilder::new()
            .add(1, "Dehradun", 30.3165, 78.0322, "City")
            .add(2, "Dehradun", 0.0, 0.0, "City")
            .add(1, "Somewhere", 0.0, 0.0, "City")
            .build();

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.find("Dehradun").unwrap().coordinate,
            Coordinate::new(30.3165, 78.0322)
        );
        assert!(catalog.find("Somewhere").is_none());
    }

    #[test]
    fn builder_skips_unknown_category() {
        let catalog = PlaceCatalogBuilder::new()
            .add(1, "Goa", 15.2993, 74.1240, "Beach")
            .add(2, "Auli", 30.5417, 79.5666, "Ski Resort")
            .build();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("Goa").is_none());
    }
}
