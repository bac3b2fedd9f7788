//! Subscription subcommands

use clap::Subcommand;

use crate::display::format_subscription_list;
use crate::error::{PocketFlowError, PocketFlowResult};
use crate::models::ExpenseCategory;
use crate::services::{CreateSubscriptionInput, SubscriptionService};
use crate::session::Session;

use super::{parse_amount, resolve_subscription_id};

/// Subscription management subcommands
#[derive(Debug, Subcommand)]
pub enum SubscriptionCommands {
    /// Register a new subscription
    Add {
        /// Subscription name
        name: String,

        /// Amount charged each month (e.g. "119.99")
        amount: String,

        /// Category key (see `categories`)
        #[arg(short, long, default_value = "other")]
        category: String,

        /// Day of the month the charge falls on (1-28)
        #[arg(short, long)]
        day: u32,
    },

    /// Delete a subscription by id
    #[command(alias = "rm")]
    Delete {
        /// Subscription id (short form or full UUID)
        id: String,
    },

    /// Pause a subscription so billing skips it
    Pause { id: String },

    /// Resume a paused subscription
    Resume { id: String },

    /// List all subscriptions
    #[command(alias = "ls")]
    List,
}

/// Handle a subscription subcommand against the session
pub fn handle_subscription_command(
    session: &mut Session,
    command: SubscriptionCommands,
) -> PocketFlowResult<()> {
    match command {
        SubscriptionCommands::Add {
            name,
            amount,
            category,
            day,
        } => {
            let amount = parse_amount(&amount)?;
            let category: ExpenseCategory = category
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    PocketFlowError::Parse(e.to_string())
                })?;

            let mut service = SubscriptionService::new(&mut session.registry);
            let subscription = service.create(CreateSubscriptionInput {
                name,
                amount,
                category,
                billing_day: day,
            })?;
            println!("Added {}: {}", subscription.id, subscription);
        }
        SubscriptionCommands::Delete { id } => {
            let id = resolve_subscription_id(&session.registry, &id)?;
            let mut service = SubscriptionService::new(&mut session.registry);
            let removed = service.delete(id)?;
            println!("Deleted {}: {}", removed.id, removed);
        }
        SubscriptionCommands::Pause { id } => {
            let id = resolve_subscription_id(&session.registry, &id)?;
            let mut service = SubscriptionService::new(&mut session.registry);
            let subscription = service.set_active(id, false)?;
            println!("Paused {}", subscription.name);
        }
        SubscriptionCommands::Resume { id } => {
            let id = resolve_subscription_id(&session.registry, &id)?;
            let mut service = SubscriptionService::new(&mut session.registry);
            let subscription = service.set_active(id, true)?;
            println!("Resumed {}", subscription.name);
        }
        SubscriptionCommands::List => {
            let service = SubscriptionService::new(&mut session.registry);
            let subscriptions = service.list();
            if subscriptions.is_empty() {
                println!("No subscriptions registered.");
            } else {
                print!("{}", format_subscription_list(&subscriptions));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn add(name: &str) -> SubscriptionCommands {
        SubscriptionCommands::Add {
            name: name.to_string(),
            amount: "119.99".to_string(),
            category: "entertainment".to_string(),
            day: 5,
        }
    }

    #[test]
    fn test_add_registers_subscription() {
        let mut session = Session::new();
        handle_subscription_command(&mut session, add("Netflix")).unwrap();

        assert_eq!(session.registry.count(), 1);
        let sub = &session.registry.subscriptions()[0];
        assert_eq!(sub.amount, Money::from_cents(11999));
        assert!(sub.active);
    }

    #[test]
    fn test_pause_and_resume_by_short_id() {
        let mut session = Session::new();
        handle_subscription_command(&mut session, add("Netflix")).unwrap();
        let short = session.registry.subscriptions()[0].id.to_string();

        handle_subscription_command(
            &mut session,
            SubscriptionCommands::Pause { id: short.clone() },
        )
        .unwrap();
        assert!(!session.registry.subscriptions()[0].active);

        handle_subscription_command(&mut session, SubscriptionCommands::Resume { id: short })
            .unwrap();
        assert!(session.registry.subscriptions()[0].active);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut session = Session::new();
        let err = handle_subscription_command(
            &mut session,
            SubscriptionCommands::Delete {
                id: "sub-ffffffff".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_rejects_out_of_range_day() {
        let mut session = Session::new();
        let err = handle_subscription_command(
            &mut session,
            SubscriptionCommands::Add {
                name: "Netflix".to_string(),
                amount: "119.99".to_string(),
                category: "entertainment".to_string(),
                day: 31,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(session.registry.is_empty());
    }
}
