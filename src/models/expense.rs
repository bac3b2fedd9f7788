//! Expense model
//!
//! A single recorded expense. Expenses are immutable once created; the only
//! lifecycle operation after creation is deletion by id. The `unnecessary`
//! flag marks discretionary spending for the monthly report.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Display title (falls back to the category title when not supplied)
    pub title: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category of the expense
    pub category: ExpenseCategory,

    /// When the expense occurred
    pub date: NaiveDateTime,

    /// Discretionary-spend marker
    #[serde(default)]
    pub unnecessary: bool,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    ///
    /// A blank or whitespace-only title is replaced by the category title.
    /// Amount validity is checked separately via [`Expense::validate`].
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        date: NaiveDateTime,
    ) -> Self {
        let title = title.into();
        let title = match title.trim() {
            "" => category.title().to_string(),
            trimmed => trimmed.to_string(),
        };

        Self {
            id: ExpenseId::new(),
            title,
            amount,
            category,
            date,
            unnecessary: false,
            created_at: Utc::now(),
        }
    }

    /// Create a new expense flagged as unnecessary spending
    pub fn unnecessary(
        title: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        date: NaiveDateTime,
    ) -> Self {
        let mut expense = Self::new(title, amount, category, date);
        expense.unnecessary = true;
        expense
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category.emoji(),
            self.title,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
