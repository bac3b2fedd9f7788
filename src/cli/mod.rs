//! CLI command definitions and handlers
//!
//! This module contains the clap command surface and its handlers, bridging
//! argument parsing with the service layer. The same `Command` enum backs
//! both one-shot invocation and the interactive shell.

pub mod expense;
pub mod report;
pub mod shell;
pub mod subscription;

use chrono::NaiveDateTime;
use clap::Subcommand;

use crate::error::{PocketFlowError, PocketFlowResult};
use crate::models::{ExpenseId, Money, SubscriptionId};
use crate::session::Session;
use crate::store::{Ledger, Registry};

pub use expense::ExpenseCommands;
pub use shell::run_shell;
pub use subscription::SubscriptionCommands;

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Subscription management commands
    #[command(subcommand, alias = "subscription")]
    Sub(SubscriptionCommands),

    /// List the available expense categories
    Categories,

    /// Run the subscription billing routine
    Tick {
        /// Reference instant (YYYY-MM-DD, defaults to now)
        #[arg(long)]
        now: Option<String>,
    },

    /// Show the monthly summary
    Summary {
        /// Month to summarize (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Show the most recent expenses
    Recent,

    /// Show the current spending streak
    Streak,

    /// Set, clear, or show the monthly spending limit
    Limit {
        /// Limit amount (e.g. "1500" or "1500.50")
        amount: Option<String>,
        /// Clear the limit
        #[arg(long)]
        clear: bool,
    },

    /// Exit the shell
    #[command(alias = "exit")]
    Quit,
}

/// What the shell loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Exit,
}

/// Handle a top-level command against the session
pub fn dispatch(
    session: &mut Session,
    command: Command,
    now: NaiveDateTime,
) -> PocketFlowResult<CommandOutcome> {
    match command {
        Command::Expense(cmd) => expense::handle_expense_command(session, cmd, now)?,
        Command::Sub(cmd) => subscription::handle_subscription_command(session, cmd)?,
        Command::Categories => {
            print!("{}", crate::display::format_category_list());
        }
        Command::Tick { now: at } => report::handle_tick(session, at, now)?,
        Command::Summary { month } => report::handle_summary(session, month, now)?,
        Command::Recent => report::handle_recent(session),
        Command::Streak => report::handle_streak(session, now.date()),
        Command::Limit { amount, clear } => report::handle_limit(session, amount, clear)?,
        Command::Quit => return Ok(CommandOutcome::Exit),
    }

    Ok(CommandOutcome::Continue)
}

/// Parse a positive money amount from user input
pub(crate) fn parse_amount(s: &str) -> PocketFlowResult<Money> {
    Money::parse(s).map_err(|e| PocketFlowError::Parse(e.to_string()))
}

/// Resolve an expense id string against the ledger
///
/// Accepts the short display form ("exp-1a2b3c4d"), the bare hex prefix, or
/// a full UUID. An empty needle never matches, and a prefix matching more
/// than one record is rejected rather than resolved arbitrarily.
pub(crate) fn resolve_expense_id(ledger: &Ledger, s: &str) -> PocketFlowResult<ExpenseId> {
    let needle = s.strip_prefix("exp-").unwrap_or(s).trim();
    if needle.is_empty() {
        return Err(PocketFlowError::expense_not_found(s));
    }

    let mut matches = ledger
        .expenses()
        .iter()
        .filter(|e| e.id.as_uuid().to_string().starts_with(needle));

    match (matches.next(), matches.next()) {
        (Some(expense), None) => Ok(expense.id),
        (Some(_), Some(_)) => Err(PocketFlowError::Validation(format!(
            "Expense id '{}' is ambiguous; give more characters or the full id",
            s
        ))),
        (None, _) => Err(PocketFlowError::expense_not_found(s)),
    }
}

/// Resolve a subscription id string against the registry
///
/// Same matching rules as [`resolve_expense_id`].
pub(crate) fn resolve_subscription_id(
    registry: &Registry,
    s: &str,
) -> PocketFlowResult<SubscriptionId> {
    let needle = s.strip_prefix("sub-").unwrap_or(s).trim();
    if needle.is_empty() {
        return Err(PocketFlowError::subscription_not_found(s));
    }

    let mut matches = registry
        .subscriptions()
        .iter()
        .filter(|sub| sub.id.as_uuid().to_string().starts_with(needle));

    match (matches.next(), matches.next()) {
        (Some(subscription), None) => Ok(subscription.id),
        (Some(_), Some(_)) => Err(PocketFlowError::Validation(format!(
            "Subscription id '{}' is ambiguous; give more characters or the full id",
            s
        ))),
        (None, _) => Err(PocketFlowError::subscription_not_found(s)),
    }
}
