//! pocketflow - personal expense and subscription tracker
//!
//! Tracks one-off expenses and recurring subscriptions for a single user.
//! Subscriptions are charged by an idempotent billing routine that posts at
//! most one expense per subscription per calendar month, backdated to the
//! nominal billing date. Reports (monthly summary, category breakdown,
//! spending streak) are pure queries over the ledger snapshot.
//!
//! All state is held in memory for the lifetime of a session; there is no
//! persistence layer.

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod store;

pub use error::{PocketFlowError, PocketFlowResult};
