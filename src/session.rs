//! Session state
//!
//! A session owns the expense ledger, the subscription registry, and the
//! user's monthly spending limit. All state is in memory for the lifetime
//! of the session and is gone when the process exits.

use chrono::{Duration, NaiveDateTime};

use crate::models::{Expense, ExpenseCategory, Money, Subscription};
use crate::store::{Ledger, Registry};

/// In-memory state for one tracker session
#[derive(Debug, Default)]
pub struct Session {
    pub ledger: Ledger,
    pub registry: Registry,
    /// Monthly spending limit; None means no limit configured
    pub monthly_limit: Option<Money>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session seeded with demo data around the given instant
    pub fn with_demo_data(now: NaiveDateTime) -> Self {
        let mut session = Self::new();

        session.ledger.add(Expense::new(
            "Morning coffee",
            Money::from_cents(450),
            ExpenseCategory::Coffee,
            now,
        ));
        session.ledger.add(Expense::new(
            "Lunch",
            Money::from_cents(2350),
            ExpenseCategory::Food,
            now - Duration::days(1),
        ));
        session.ledger.add(Expense::new(
            "Bus ticket",
            Money::from_cents(275),
            ExpenseCategory::Transport,
            now - Duration::days(2),
        ));
        session.ledger.add(Expense::unnecessary(
            "Sneakers",
            Money::from_cents(17999),
            ExpenseCategory::Shopping,
            now - Duration::days(6),
        ));

        session.registry.add(Subscription::new(
            "Netflix",
            Money::from_cents(11999),
            ExpenseCategory::Entertainment,
            5,
        ));
        session.registry.add(Subscription::new(
            "Spotify",
            Money::from_cents(5999),
            ExpenseCategory::Entertainment,
            12,
        ));

        session
    }
}
