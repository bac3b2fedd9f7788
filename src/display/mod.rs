//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod category;
pub mod expense;
pub mod subscription;

pub use category::format_category_list;
pub use expense::format_expense_list;
pub use subscription::format_subscription_list;
