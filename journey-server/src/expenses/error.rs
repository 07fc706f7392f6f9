//! Expense tracker error types.

use crate::domain::InvalidAmount;

use super::InvalidExpenseCategory;

/// Errors from validating a new expense.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseError {
    /// Amount missing, malformed, or not positive
    #[error(transparent)]
    Amount(#[from] InvalidAmount),

    /// Category not in the fixed list
    #[error(transparent)]
    Category(#[from] InvalidExpenseCategory),

    /// Date not in YYYY-MM-DD form
    #[error("invalid date: {0:?}")]
    Date(String),

    /// Ledger already holds its maximum number of expenses
    #[error("expense limit of {limit} reached; delete an expense to add another")]
    Full { limit: usize },
}
