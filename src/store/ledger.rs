//! Expense ledger
//!
//! Append-only ordered collection of expense records, with user-initiated
//! delete by id. Insertion order is preserved internally; date-ordered views
//! are produced on demand.

use crate::error::{PocketFlowError, PocketFlowResult};
use crate::models::{Expense, ExpenseId};

/// The full collection of recorded expenses
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Delete an expense by ID, returning the removed record
    pub fn delete(&mut self, id: ExpenseId) -> PocketFlowResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| PocketFlowError::expense_not_found(id.to_string()))?;
        Ok(self.expenses.remove(index))
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// All expenses sorted by date, newest first
    pub fn get_all(&self) -> Vec<Expense> {
        let mut expenses = self.expenses.clone();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    /// Number of recorded expenses
    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
