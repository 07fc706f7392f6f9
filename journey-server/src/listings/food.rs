//! Dish search.

use crate::catalog::Dish;

use super::facet::{Facet, facet_options};

/// Filter over the dish guide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishFilter {
    /// Free-text search over name and description.
    pub search: String,
    pub category: Facet,
    pub region: Facet,
}

impl DishFilter {
    /// Build a filter from raw query values.
    pub fn from_params(search: Option<&str>, category: Option<&str>, region: Option<&str>) -> Self {
        Self {
            search: search.unwrap_or_default().trim().to_string(),
            category: Facet::parse(category),
            region: Facet::parse(region),
        }
    }

    /// Whether a dish passes the filter.
    ///
    /// The search term matches case-insensitively anywhere in the name or
    /// the description; an empty term matches everything.
    pub fn matches(&self, dish: &Dish) -> bool {
        let term = self.search.to_lowercase();
        let search_match = dish.name.to_lowercase().contains(&term)
            || dish.description.to_lowercase().contains(&term);

        search_match && self.category.matches(dish.category) && self.region.matches(dish.region)
    }

    /// Dishes passing the filter, in guide order.
    pub fn apply<'a>(&self, dishes: &'a [Dish]) -> Vec<&'a Dish> {
        dishes.iter().filter(|d| self.matches(d)).collect()
    }
}

/// Category facet options for the given dishes.
pub fn category_options(dishes: &[Dish]) -> Vec<&'static str> {
    facet_options(dishes.iter().map(|d| d.category))
}

/// Region facet options for the given dishes.
pub fn region_options(dishes: &[Dish]) -> Vec<&'static str> {
    facet_options(dishes.iter().map(|d| d.region))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::guide::DISHES;

    fn names(found: &[&Dish]) -> Vec<&'static str> {
        found.iter().map(|d| d.name).collect()
    }

    #[test]
    fn empty_filter_matches_all() {
        assert_eq!(DishFilter::default().apply(DISHES).len(), DISHES.len());
    }

    #[test]
    fn search_name_case_insensitive() {
        let filter = DishFilter::from_params(Some("KAFULI"), None, None);
        assert_eq!(names(&filter.apply(DISHES)), vec!["Kafuli"]);
    }

    #[test]
    fn search_description() {
        let filter = DishFilter::from_params(Some("millet"), None, None);
        assert_eq!(names(&filter.apply(DISHES)), vec!["Mandua ki Roti"]);
    }

    #[test]
    fn category_and_region() {
        let filter = DishFilter::from_params(None, Some("Vegetarian"), Some("Kumaon"));
        assert_eq!(names(&filter.apply(DISHES)), vec!["Aloo ke Gutke"]);
    }

    #[test]
    fn search_with_region() {
        let filter = DishFilter::from_params(Some("traditional"), None, Some("Almora"));
        assert_eq!(names(&filter.apply(DISHES)), vec!["Bal Mithai"]);
    }

    #[test]
    fn nothing_found() {
        let filter = DishFilter::from_params(Some("pizza"), None, None);
        assert!(filter.apply(DISHES).is_empty());
    }

    #[test]
    fn options() {
        assert_eq!(
            category_options(DISHES),
            vec!["all", "Vegetarian", "Condiment", "Bread", "Dessert"]
        );
        assert_eq!(
            region_options(DISHES),
            vec!["all", "Garhwal", "Kumaon", "All Regions", "Almora"]
        );
    }
}
