//! Subscription model
//!
//! A recurring monthly charge. Each subscription tracks the last instant the
//! billing routine processed a charge for it, which is what guarantees at
//! most one charge per calendar month.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::SubscriptionId;
use super::money::Money;
use super::period::MonthPeriod;

/// Billing days are capped at 28 so the nominal billing date exists in
/// every month.
pub const MAX_BILLING_DAY: u32 = 28;

/// A recurring monthly subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier
    pub id: SubscriptionId,

    /// Subscription name (e.g., "Netflix")
    pub name: String,

    /// Monthly charge amount (always positive)
    pub amount: Money,

    /// Category the synthesized expenses are filed under
    pub category: ExpenseCategory,

    /// Day of month the charge recurs on (1-28)
    pub billing_day: u32,

    /// Inactive subscriptions are skipped entirely by the billing routine
    pub active: bool,

    /// When the billing routine last charged this subscription; None means
    /// never charged
    pub last_charged: Option<NaiveDateTime>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Create a new active subscription
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        billing_day: u32,
    ) -> Self {
        Self {
            id: SubscriptionId::new(),
            name: name.into().trim().to_string(),
            amount,
            category,
            billing_day,
            active: true,
            last_charged: None,
            created_at: Utc::now(),
        }
    }

    /// Validate the subscription
    pub fn validate(&self) -> Result<(), SubscriptionValidationError> {
        if self.name.trim().is_empty() {
            return Err(SubscriptionValidationError::EmptyName);
        }

        if !self.amount.is_positive() {
            return Err(SubscriptionValidationError::NonPositiveAmount(self.amount));
        }

        if !(1..=MAX_BILLING_DAY).contains(&self.billing_day) {
            return Err(SubscriptionValidationError::BillingDayOutOfRange(
                self.billing_day,
            ));
        }

        Ok(())
    }

    /// The nominal billing date within the given month
    ///
    /// Always a real date for validated subscriptions, since every month has
    /// at least [`MAX_BILLING_DAY`] days.
    pub fn billing_date_in(&self, period: MonthPeriod) -> Option<NaiveDate> {
        period.date_with_day(self.billing_day)
    }

    /// Whether this subscription was already charged in the given month
    pub fn charged_in(&self, period: MonthPeriod) -> bool {
        self.last_charged
            .map(|instant| period.contains_datetime(instant))
            .unwrap_or(false)
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (day {}, {})",
            self.name,
            self.amount,
            self.billing_day,
            if self.active { "active" } else { "paused" }
        )
    }
}

/// Validation errors for subscriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    BillingDayOutOfRange(u32),
}

impl fmt::Display for SubscriptionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Subscription name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Subscription amount must be positive (got {})", amount)
            }
            Self::BillingDayOutOfRange(day) => write!(
                f,
                "Billing day must be between 1 and {} (got {})",
                MAX_BILLING_DAY, day
            ),
        }
    }
}

impl std::error::Error for SubscriptionValidationError {}
