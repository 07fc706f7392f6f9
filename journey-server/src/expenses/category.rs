//! Expense categories.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an unknown expense category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown expense category: {0:?}")]
pub struct InvalidExpenseCategory(pub String);

/// What an expense was spent on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    #[default]
    Accommodation,
    Food,
    Transportation,
    Activities,
    Shopping,
    Others,
}

impl ExpenseCategory {
    /// All categories, in the order they are listed and summarised.
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Accommodation,
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Activities,
        ExpenseCategory::Shopping,
        ExpenseCategory::Others,
    ];

    /// Parse a category from its label.
    pub fn parse(s: &str) -> Result<Self, InvalidExpenseCategory> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| InvalidExpenseCategory(s.to_string()))
    }

    /// The display label.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Accommodation => "Accommodation",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Activities => "Activities",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Others => "Others",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ExpenseCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for category in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::parse(&category.to_string()), Ok(category));
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            ExpenseCategory::parse("Souvenirs"),
            Err(InvalidExpenseCategory("Souvenirs".to_string()))
        );
    }

    #[test]
    fn default_is_accommodation() {
        assert_eq!(ExpenseCategory::default(), ExpenseCategory::Accommodation);
    }
}
