//! Aggregation reports over a ledger snapshot
//!
//! Every report is a pure query: it takes the expense snapshot and an
//! explicit reference instant, and computes fresh on each call. Nothing is
//! cached and no report reads the wall clock itself.

pub mod streak;
pub mod summary;

pub use streak::spending_streak;
pub use summary::{
    month_expenses, recent_expenses, CategoryTotal, LimitProgress, MonthlySummary, RECENT_COUNT,
};
