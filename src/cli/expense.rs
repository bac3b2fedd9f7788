//! Expense subcommands

use chrono::{NaiveDate, NaiveDateTime};
use clap::Subcommand;

use crate::display::format_expense_list;
use crate::error::{PocketFlowError, PocketFlowResult};
use crate::models::ExpenseCategory;
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::session::Session;

use super::{parse_amount, resolve_expense_id};

/// Expense management subcommands
#[derive(Debug, Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g. "120" or "4.50")
        amount: String,

        /// Category key (see `categories`)
        #[arg(short, long, default_value = "other")]
        category: String,

        /// Display title; defaults to the category name
        #[arg(short, long)]
        title: Option<String>,

        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Mark as unnecessary spending
        #[arg(short, long)]
        unnecessary: bool,
    },

    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete {
        /// Expense id (short form or full UUID)
        id: String,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle an expense subcommand against the session
pub fn handle_expense_command(
    session: &mut Session,
    command: ExpenseCommands,
    now: NaiveDateTime,
) -> PocketFlowResult<()> {
    match command {
        ExpenseCommands::Add {
            amount,
            category,
            title,
            date,
            unnecessary,
        } => {
            let amount = parse_amount(&amount)?;
            let category: ExpenseCategory = category
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    PocketFlowError::Parse(e.to_string())
                })?;
            let date = match date {
                Some(s) => parse_date(&s)?.and_hms_opt(0, 0, 0).unwrap(),
                None => now,
            };

            let mut service = ExpenseService::new(&mut session.ledger);
            let expense = service.create(CreateExpenseInput {
                title,
                amount,
                category,
                date,
                unnecessary,
            })?;
            println!("Recorded {}: {}", expense.id, expense);
        }
        ExpenseCommands::Delete { id } => {
            let id = resolve_expense_id(&session.ledger, &id)?;
            let mut service = ExpenseService::new(&mut session.ledger);
            let removed = service.delete(id)?;
            println!("Deleted {}: {}", removed.id, removed);
        }
        ExpenseCommands::List { limit } => {
            let service = ExpenseService::new(&mut session.ledger);
            let mut expenses = service.list();
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            if expenses.is_empty() {
                println!("No expenses recorded.");
            } else {
                print!("{}", format_expense_list(&expenses));
            }
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> PocketFlowResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| PocketFlowError::Parse(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_date("03/01/2025").is_err());
    }

    #[test]
    fn test_add_records_expense() {
        let mut session = Session::new();
        handle_expense_command(
            &mut session,
            ExpenseCommands::Add {
                amount: "4.50".to_string(),
                category: "coffee".to_string(),
                title: Some("Latte".to_string()),
                date: None,
                unnecessary: false,
            },
            noon(),
        )
        .unwrap();

        assert_eq!(session.ledger.count(), 1);
        let expense = &session.ledger.expenses()[0];
        assert_eq!(expense.amount, Money::from_cents(450));
        assert_eq!(expense.date, noon());
    }

    #[test]
    fn test_add_with_explicit_date_backdates() {
        let mut session = Session::new();
        handle_expense_command(
            &mut session,
            ExpenseCommands::Add {
                amount: "10".to_string(),
                category: "food".to_string(),
                title: None,
                date: Some("2025-02-28".to_string()),
                unnecessary: true,
            },
            noon(),
        )
        .unwrap();

        let expense = &session.ledger.expenses()[0];
        assert_eq!(
            expense.date.date(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(expense.unnecessary);
    }

    #[test]
    fn test_add_rejects_bad_category() {
        let mut session = Session::new();
        let err = handle_expense_command(
            &mut session,
            ExpenseCommands::Add {
                amount: "10".to_string(),
                category: "groceries".to_string(),
                title: None,
                date: None,
                unnecessary: false,
            },
            noon(),
        )
        .unwrap_err();

        assert!(matches!(err, PocketFlowError::Parse(_)));
        assert!(session.ledger.is_empty());
    }

    #[test]
    fn test_delete_by_short_id() {
        let mut session = Session::new();
        handle_expense_command(
            &mut session,
            ExpenseCommands::Add {
                amount: "10".to_string(),
                category: "other".to_string(),
                title: None,
                date: None,
                unnecessary: false,
            },
            noon(),
        )
        .unwrap();
        let short = session.ledger.expenses()[0].id.to_string();

        handle_expense_command(&mut session, ExpenseCommands::Delete { id: short }, noon())
            .unwrap();
        assert!(session.ledger.is_empty());
    }
}
