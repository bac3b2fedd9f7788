//! Billing and report commands

use chrono::{NaiveDate, NaiveDateTime};

use crate::display::format_expense_list;
use crate::error::{PocketFlowError, PocketFlowResult};
use crate::models::MonthPeriod;
use crate::reports::{recent_expenses, spending_streak, MonthlySummary, RECENT_COUNT};
use crate::services::BillingService;
use crate::session::Session;

use super::parse_amount;

/// Run the billing routine against the registry
///
/// `at` overrides the reference instant for testing billing behavior; it is
/// parsed as a date and billed as of midnight that day.
pub fn handle_tick(
    session: &mut Session,
    at: Option<String>,
    now: NaiveDateTime,
) -> PocketFlowResult<()> {
    let instant = match at {
        Some(s) => parse_tick_date(&s)?.and_hms_opt(0, 0, 0).unwrap(),
        None => now,
    };

    let mut billing = BillingService::new(&mut session.registry, &mut session.ledger);
    let charged = billing.apply_due(instant);

    if charged.is_empty() {
        println!("No subscriptions due.");
    } else {
        println!("Charged {} subscription(s):", charged.len());
        print!("{}", format_expense_list(&charged));
    }

    Ok(())
}

/// Print the monthly summary for the given or current month
pub fn handle_summary(
    session: &Session,
    month: Option<String>,
    now: NaiveDateTime,
) -> PocketFlowResult<()> {
    let period = match month {
        Some(s) => MonthPeriod::parse(&s).map_err(|e| PocketFlowError::Parse(e.to_string()))?,
        None => MonthPeriod::of_datetime(now),
    };

    let summary = MonthlySummary::generate(session.ledger.expenses(), period, session.monthly_limit);
    print!("{}", summary.format_terminal());
    Ok(())
}

/// Print the most recent expenses
pub fn handle_recent(session: &Session) {
    let recent = recent_expenses(session.ledger.expenses(), RECENT_COUNT);
    if recent.is_empty() {
        println!("No expenses recorded.");
    } else {
        print!("{}", format_expense_list(&recent));
    }
}

/// Print the current spending streak
pub fn handle_streak(session: &Session, today: NaiveDate) {
    let days = spending_streak(session.ledger.expenses(), today);
    match days {
        0 => println!("No spending streak. Nothing spent today."),
        1 => println!("Spending streak: 1 day."),
        n => println!("Spending streak: {} days.", n),
    }
}

/// Set, clear, or show the monthly spending limit
pub fn handle_limit(
    session: &mut Session,
    amount: Option<String>,
    clear: bool,
) -> PocketFlowResult<()> {
    if clear {
        session.monthly_limit = None;
        println!("Monthly limit cleared.");
        return Ok(());
    }

    match amount {
        Some(s) => {
            let limit = parse_amount(&s)?;
            if !limit.is_positive() {
                return Err(PocketFlowError::Validation(
                    "Monthly limit must be positive".to_string(),
                ));
            }
            session.monthly_limit = Some(limit);
            println!("Monthly limit set to {}.", limit);
        }
        None => match session.monthly_limit {
            Some(limit) => println!("Monthly limit: {}", limit),
            None => println!("No monthly limit configured."),
        },
    }

    Ok(())
}

fn parse_tick_date(s: &str) -> PocketFlowResult<NaiveDate> {
    super::expense::parse_date(s)
}
