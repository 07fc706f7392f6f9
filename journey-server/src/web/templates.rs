//! Askama templates for the web frontend.

use askama::Template;
use chrono::NaiveDate;

use crate::catalog::{Accommodation, Attraction, Destination, Dining, Dish, Lodging};
use crate::expenses::{CategoryTotal, Expense};
use crate::listings::ALL;
use crate::planner::{MapView, TripResult};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub featured: Vec<DestinationView>,
}

/// Destination guide.
#[derive(Template)]
#[template(path = "destinations.html")]
pub struct DestinationsTemplate {
    pub destinations: Vec<DestinationView>,
}

/// Accommodation search page.
#[derive(Template)]
#[template(path = "accommodations.html")]
pub struct AccommodationsTemplate {
    pub listings: Vec<AccommodationView>,
    pub locations: Vec<SelectOption>,
    pub kinds: Vec<SelectOption>,
    pub max_price: u32,
    pub min_price: u32,
    pub slider_max: u32,
    pub price_step: u32,
}

/// Food guide page.
#[derive(Template)]
#[template(path = "food.html")]
pub struct FoodTemplate {
    pub dishes: Vec<DishView>,
    pub search: String,
    pub categories: Vec<SelectOption>,
    pub regions: Vec<SelectOption>,
}

/// Expense tracker page.
#[derive(Template)]
#[template(path = "expenses.html")]
pub struct ExpensesTemplate {
    pub expenses: Vec<ExpenseView>,
    pub total: String,
    /// Only categories with spending.
    pub totals: Vec<CategoryTotalView>,
    pub categories: Vec<SelectOption>,
    pub form_amount: String,
    pub form_date: String,
    pub form_description: String,
    pub error: Option<String>,
}

/// Contact page.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub enabled: bool,
    pub notice: Option<Notice>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Trip planner page, with results when a full query was submitted.
#[derive(Template)]
#[template(path = "trip_planner.html")]
pub struct TripPlannerTemplate {
    pub sources: Vec<SelectOption>,
    pub destinations: Vec<SelectOption>,
    pub date: String,
    pub error: Option<String>,
    pub trip: Option<TripView>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One `<option>` in a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Build options for `values`, marking the one equal to `current`.
    pub fn list<'a>(
        values: impl IntoIterator<Item = &'a str>,
        current: &str,
        label: impl Fn(&str) -> String,
    ) -> Vec<SelectOption> {
        values
            .into_iter()
            .map(|v| SelectOption {
                value: v.to_string(),
                label: label(v),
                selected: v == current,
            })
            .collect()
    }
}

/// Label facet options with a fixed caption for the "all" entry.
pub fn all_label(caption: &'static str) -> impl Fn(&str) -> String {
    move |v| {
        if v == ALL {
            caption.to_string()
        } else {
            v.to_string()
        }
    }
}

/// Upper-case the first character: "all" -> "All".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format an integer with comma thousands separators: 3583 -> "3,583".
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a date the way the UI shows it: "19 Oct 2026".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Destination view model.
#[derive(Debug, Clone)]
pub struct DestinationView {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub district: &'static str,
    pub altitude: String,
    pub best_time: &'static str,
    pub activities: &'static [&'static str],
}

impl DestinationView {
    pub fn from_destination(d: &Destination) -> Self {
        Self {
            name: d.name,
            image: d.image,
            description: d.description,
            district: d.district,
            altitude: format!("{} meters", group_thousands(d.altitude_m)),
            best_time: d.best_time,
            activities: d.activities,
        }
    }
}

/// Accommodation card view model.
#[derive(Debug, Clone)]
pub struct AccommodationView {
    pub name: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub rating: String,
    pub kind: &'static str,
    pub capacity: &'static str,
    pub price: String,
    pub amenities: &'static [&'static str],
}

impl AccommodationView {
    pub fn from_accommodation(a: &Accommodation) -> Self {
        Self {
            name: a.name,
            location: a.location,
            image: a.image,
            rating: format!("{:.1}", a.rating),
            kind: a.kind,
            capacity: a.capacity,
            price: format!("₹{}", group_thousands(a.price_per_night)),
            amenities: a.amenities,
        }
    }
}

/// Dish card view model.
#[derive(Debug, Clone)]
pub struct DishView {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub region: &'static str,
    pub rating: String,
    pub price: &'static str,
    pub restaurants: &'static [&'static str],
}

impl DishView {
    pub fn from_dish(d: &Dish) -> Self {
        Self {
            name: d.name,
            image: d.image,
            description: d.description,
            category: d.category,
            region: d.region,
            rating: format!("{:.1}", d.rating),
            price: d.price,
            restaurants: d.restaurants,
        }
    }
}

/// Expense row view model.
#[derive(Debug, Clone)]
pub struct ExpenseView {
    pub id: u64,
    pub category: &'static str,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl ExpenseView {
    pub fn from_expense(e: &Expense) -> Self {
        Self {
            id: e.id.0,
            category: e.category.label(),
            amount: e.amount.to_string(),
            date: display_date(e.date),
            description: e.description.clone(),
        }
    }
}

/// Per-category total view model.
#[derive(Debug, Clone)]
pub struct CategoryTotalView {
    pub category: &'static str,
    pub amount: String,
}

impl CategoryTotalView {
    pub fn from_total(t: &CategoryTotal) -> Self {
        Self {
            category: t.category.label(),
            amount: t.amount.to_string(),
        }
    }
}

/// Flash message after a form submission.
#[derive(Debug, Clone)]
pub struct Notice {
    pub success: bool,
    pub text: String,
}

/// Resolved trip view model.
#[derive(Debug, Clone)]
pub struct TripView {
    pub source: String,
    pub destination: String,
    /// "16 kilometers", or `None` when either endpoint is unknown.
    pub distance: Option<String>,
    pub date: String,
    /// Map payload as JSON, safe to embed in a `<script>` element.
    pub map_json: String,
    pub attractions: &'static [Attraction],
    pub lodging: &'static [Lodging],
    pub dining: &'static [Dining],
}

impl TripView {
    /// Create from a resolved trip and its map.
    pub fn from_trip(
        trip: &TripResult<'_>,
        map: &MapView,
        source: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Self {
        let map_json = serde_json::to_string(map)
            .unwrap_or_else(|_| "null".to_string())
            .replace("</", "<\\/");

        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            distance: trip.distance_km.map(|d| format!("{d} kilometers")),
            date: display_date(date),
            map_json,
            attractions: trip.attractions,
            lodging: trip.lodging,
            dining: trip.dining,
        }
    }
}
