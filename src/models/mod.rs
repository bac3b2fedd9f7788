//! Core data models for pocketflow
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, subscriptions, categories, money, and
//! calendar-month periods.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;
pub mod subscription;

pub use category::ExpenseCategory;
pub use expense::Expense;
pub use ids::{ExpenseId, SubscriptionId};
pub use money::Money;
pub use period::MonthPeriod;
pub use subscription::Subscription;
