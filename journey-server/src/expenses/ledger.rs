//! The expense ledger.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Amount;

use super::{ExpenseCategory, ExpenseError};

/// Default number of expenses a ledger holds before refusing new ones.
pub const MAX_EXPENSES: usize = 1000;

/// Identifier of an expense within a ledger. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated expense waiting to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub category: ExpenseCategory,
    pub amount: Amount,
    pub date: NaiveDate,
    pub description: String,
}

impl NewExpense {
    /// Validate raw form input.
    ///
    /// The amount must parse as a positive rupee value and the date as
    /// `YYYY-MM-DD`. The description is trimmed and may be empty.
    pub fn parse(
        category: &str,
        amount: &str,
        date: &str,
        description: &str,
    ) -> Result<Self, ExpenseError> {
        let category = ExpenseCategory::parse(category)?;
        let amount = Amount::parse(amount)?;
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ExpenseError::Date(date.to_string()))?;

        Ok(Self {
            category,
            amount,
            date,
            description: description.trim().to_string(),
        })
    }
}

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category: ExpenseCategory,
    pub amount: Amount,
    pub date: NaiveDate,
    pub description: String,
}

/// Total spent in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: Amount,
}

/// An in-memory list of expenses, in the order they were added.
///
/// Lives only as long as its owner; nothing is persisted. Holds at most
/// `capacity` expenses.
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    next_id: u64,
    capacity: usize,
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::with_capacity(MAX_EXPENSES)
    }
}

impl ExpenseLedger {
    /// Create an empty ledger holding up to [`MAX_EXPENSES`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger holding up to `capacity` expenses.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
            capacity,
        }
    }

    /// Maximum number of expenses held at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record an expense and return its id.
    ///
    /// Fails with [`ExpenseError::Full`] once the ledger holds `capacity`
    /// expenses; removing one frees a slot.
    pub fn add(&mut self, new: NewExpense) -> Result<ExpenseId, ExpenseError> {
        if self.expenses.len() >= self.capacity {
            return Err(ExpenseError::Full {
                limit: self.capacity,
            });
        }

        let id = ExpenseId(self.next_id);
        self.next_id += 1;
        self.expenses.push(Expense {
            id,
            category: new.category,
            amount: new.amount,
            date: new.date,
            description: new.description,
        });
        Ok(id)
    }

    /// Remove an expense, returning it if it existed.
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let pos = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(pos))
    }

    /// Iterate over expenses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    /// Sum of every expense.
    pub fn total(&self) -> Amount {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Per-category totals for every category, in [`ExpenseCategory::ALL`]
    /// order. Categories with no spending have a zero amount.
    pub fn by_category(&self) -> Vec<CategoryTotal> {
        ExpenseCategory::ALL
            .into_iter()
            .map(|category| CategoryTotal {
                category,
                amount: self
                    .expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .map(|e| e.amount)
                    .sum(),
            })
            .collect()
    }

    /// Returns the number of expenses.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Returns true if no expenses are recorded.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn new_expense() -> impl Strategy<Value = NewExpense> {
        (0..ExpenseCategory::ALL.len(), 1u64..1_000_000).prop_map(|(c, paise)| NewExpense {
            category: ExpenseCategory::ALL[c],
            amount: Amount::from_paise(paise),
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            description: String::new(),
        })
    }

    proptest! {
        /// Category totals always add up to the overall total
        #[test]
        fn category_totals_sum_to_total(expenses in prop::collection::vec(new_expense(), 0..30)) {
            let mut ledger = ExpenseLedger::new();
            for e in expenses {
                ledger.add(e).unwrap();
            }
            let summed: Amount = ledger.by_category().iter().map(|t| t.amount).sum();
            prop_assert_eq!(summed, ledger.total());
        }

        /// Removing every added id empties the ledger
        #[test]
        fn remove_all(expenses in prop::collection::vec(new_expense(), 0..30)) {
            let mut ledger = ExpenseLedger::new();
            let ids: Vec<_> = expenses.into_iter().map(|e| ledger.add(e).unwrap()).collect();
            for id in ids {
                prop_assert!(ledger.remove(id).is_some());
            }
            prop_assert!(ledger.is_empty());
            prop_assert_eq!(ledger.total(), Amount::ZERO);
        }
    }
}
