//! Single-value facets for listing filters.

use std::fmt;

/// The value that selects every option.
pub const ALL: &str = "all";

/// A facet selection: either everything, or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Parse a facet from a query parameter.
    ///
    /// Missing, empty and `"all"` values select everything.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL) => Facet::All,
            Some(v) => Facet::Only(v.to_string()),
        }
    }

    /// Whether `value` passes this facet. Matching is exact.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
        }
    }

    /// The query-string form of this facet.
    pub fn as_str(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Only(v) => v,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facet options for a field: `"all"` followed by each distinct value in
/// first-seen order.
pub fn facet_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut options = vec![ALL];
    for value in values {
        if !options[1..].contains(&value) {
            options.push(value);
        }
    }
    options
}
