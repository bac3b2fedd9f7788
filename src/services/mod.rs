//! Service layer for pocketflow
//!
//! The service layer provides business logic on top of the in-memory store,
//! handling validation and the recurring-billing routine.

pub mod billing;
pub mod expense;
pub mod subscription;

pub use billing::BillingService;
pub use expense::{CreateExpenseInput, ExpenseService};
pub use subscription::{CreateSubscriptionInput, SubscriptionService};
