//! The trip expense tracker.
//!
//! An [`ExpenseLedger`] is a plain state object: the web layer owns one,
//! feeds it validated [`NewExpense`]s, and renders its totals.

mod category;
mod error;
mod ledger;

pub use category::{ExpenseCategory, InvalidExpenseCategory};
pub use error::ExpenseError;
pub use ledger::{CategoryTotal, Expense, ExpenseId, ExpenseLedger, MAX_EXPENSES, NewExpense};
