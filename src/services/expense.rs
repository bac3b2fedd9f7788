//! Expense service
//!
//! Provides business logic for expense management: validated creation,
//! deletion by id, and listing. The ledger is never partially mutated; a
//! rejected input leaves it untouched.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::error::{PocketFlowError, PocketFlowResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};
use crate::store::Ledger;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Display title; blank falls back to the category title
    pub title: Option<String>,
    pub amount: Money,
    pub category: ExpenseCategory,
    pub date: NaiveDateTime,
    pub unnecessary: bool,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Create a new expense
    pub fn create(&mut self, input: CreateExpenseInput) -> PocketFlowResult<Expense> {
        let mut expense = Expense::new(
            input.title.unwrap_or_default(),
            input.amount,
            input.category,
            input.date,
        );
        expense.unnecessary = input.unnecessary;

        expense
            .validate()
            .map_err(|e| PocketFlowError::Validation(e.to_string()))?;

        info!(id = %expense.id, amount = %expense.amount, category = %expense.category, "expense recorded");
        self.ledger.add(expense.clone());
        Ok(expense)
    }

    /// Delete an expense by ID
    pub fn delete(&mut self, id: ExpenseId) -> PocketFlowResult<Expense> {
        let removed = self.ledger.delete(id)?;
        debug!(id = %id, "expense deleted");
        Ok(removed)
    }

    /// All expenses sorted by date, newest first
    pub fn list(&self) -> Vec<Expense> {
        self.ledger.get_all()
    }

    /// Count expenses
    pub fn count(&self) -> usize {
        self.ledger.count()
    }
}
