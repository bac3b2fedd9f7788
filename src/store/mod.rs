//! In-memory collections for the expense ledger and subscription registry
//!
//! Plain owned collections behind an explicit mutation API. State lives for
//! the process only; there is no persistence layer. Callers hold `&mut` for
//! writes, so a single logical writer is enforced by the borrow checker.

pub mod ledger;
pub mod registry;

pub use ledger::Ledger;
pub use registry::Registry;
