//! Subscription billing routine
//!
//! Walks the subscription registry against an explicit reference instant,
//! appends a synthesized expense for every subscription whose billing day
//! has arrived this month, and stamps the last-charged marker so the same
//! month is never charged twice. Safe to invoke any number of times; after
//! the first charge of a month, later invocations in that month are no-ops
//! for that subscription.

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::models::{Expense, MonthPeriod};
use crate::store::{Ledger, Registry};

/// The billing engine
///
/// Borrows the registry and ledger mutably for the duration of one run;
/// construct it fresh per invocation.
pub struct BillingService<'a> {
    registry: &'a mut Registry,
    ledger: &'a mut Ledger,
}

impl<'a> BillingService<'a> {
    /// Create a new billing service over the given registry and ledger
    pub fn new(registry: &'a mut Registry, ledger: &'a mut Ledger) -> Self {
        Self { registry, ledger }
    }

    /// Charge every subscription that is due at `now`
    ///
    /// For each active subscription not yet charged in `now`'s calendar
    /// month, if the nominal billing date (this month's year+month at the
    /// subscription's billing day) is at or before `now`, an expense is
    /// appended to the ledger backdated to that billing date, and the
    /// subscription's `last_charged` is set to `now` itself. Subscriptions
    /// whose billing day is still ahead are left untouched and stay
    /// eligible for later invocations within the same month.
    ///
    /// Returns the newly synthesized expenses, in registry order.
    pub fn apply_due(&mut self, now: NaiveDateTime) -> Vec<Expense> {
        let this_month = MonthPeriod::of_datetime(now);
        let mut charged = Vec::new();

        for subscription in self.registry.subscriptions_mut() {
            if !subscription.active {
                debug!(name = %subscription.name, "skipping inactive subscription");
                continue;
            }

            if subscription.charged_in(this_month) {
                debug!(name = %subscription.name, month = %this_month, "already charged this month");
                continue;
            }

            let billing_date = match subscription.billing_date_in(this_month) {
                Some(date) => date,
                None => {
                    // Unreachable for validated entries (billing day <= 28)
                    warn!(name = %subscription.name, day = subscription.billing_day, "billing day does not exist this month");
                    continue;
                }
            };

            let billing_instant = billing_date.and_hms_opt(0, 0, 0).unwrap();
            if billing_instant > now {
                debug!(name = %subscription.name, %billing_date, "billing day not reached yet");
                continue;
            }

            let expense = Expense::new(
                subscription.name.clone(),
                subscription.amount,
                subscription.category,
                billing_instant,
            );

            info!(
                name = %subscription.name,
                amount = %subscription.amount,
                date = %billing_date,
                "subscription charged"
            );

            // The marker records the check time, not the nominal billing
            // date; charged_in() only cares about the calendar month.
            subscription.last_charged = Some(now);
            self.ledger.add(expense.clone());
            charged.push(expense);
        }

        charged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money, Subscription};
    use chrono::{Datelike, NaiveDate};

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn netflix(day: u32) -> Subscription {
        Subscription::new(
            "Netflix",
            Money::from_cents(11999),
            ExpenseCategory::Entertainment,
            day,
        )
    }

    #[test]
    fn test_charge_on_the_billing_day_itself() {
        let mut registry = Registry::new();
        let mut ledger = Ledger::new();
        registry.add(netflix(5));

        let now = at(2025, 3, 5);
        let charged = BillingService::new(&mut registry, &mut ledger).apply_due(now);

        assert_eq!(charged.len(), 1);
        assert_eq!(charged[0].date.date(), NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(registry.subscriptions()[0].last_charged, Some(now));
    }

    #[test]
    fn test_charge_is_backdated_to_billing_day() {
        // Netflix, 119.99, billing day 5; now = the 10th; fresh registry
        let mut registry = Registry::new();
        let mut ledger = Ledger::new();
        registry.add(netflix(5));

        let now = at(2025, 3, 10);
        let charged = BillingService::new(&mut registry, &mut ledger).apply_due(now);

        assert_eq!(charged.len(), 1);
        let expense = &charged[0];
        assert_eq!(expense.title, "Netflix");
        assert_eq!(expense.amount.cents(), 11999);
        assert_eq!(expense.category, ExpenseCategory::Entertainment);
        assert_eq!(expense.date.date(), NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert!(!expense.unnecessary);

        // Marker carries the check time, not the nominal billing date
        assert_eq!(registry.subscriptions()[0].last_charged, Some(now));
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn test_idempotent_within_the_same_month() {
        let mut registry = Registry::new();
        let mut ledger = Ledger::new();
        registry.add(netflix(5));

        BillingService::new(&mut registry, &mut ledger).apply_due(at(2025, 3, 10));
        let second = BillingService::new(&mut registry, &mut ledger).apply_due(at(2025, 3, 20));

        assert!(second.is_empty());
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn test_repeated_call_same_instant_is_a_noop() {
        let mut registry = Registry::new();
        let mut ledger = Ledger::new();
        registry.add(netflix(5));

        let now = at(2025, 3, 10);
        BillingService::new(&mut registry, &mut ledger).apply_due(now);
        let again = BillingService::new(&mut registry, &mut ledger).apply_due(now);

        assert!(again.is_empty());
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn test_charges_again_next_month() {
        let mut registry = Registry::new();
        let mut ledger = Ledger::new();
        registry.add(netflix(5));

        BillingService::new(&mut registry, &mut ledger).apply_due(at(2025, 3, 10));
        let april = BillingService::new(&mut registry, &mut ledger).apply_due(at(2025, 4, 6));

        assert_eq!(april.len(), 1);
        assert_eq!(april[0].date.date(), NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
        assert_eq!(ledger.count(), 2);
    }

    #[test]
    fn test_inactive_subscription_is_never_touched() {
        let mut registry = Registry::new();
        let mut ledger = Ledger::new();
        let mut sub = netflix(5);
        sub.active = false;
        registry.add(sub);

        let charged = BillingService::new(&mut registry, &mut ledger).apply_due(at(2025, 3, 10));

        assert!(charged.is_empty());
        assert!(ledger.is_empty());
        assert!(registry.subscriptions()[0].last_charged.is_none());
    }

    #[test]
    fn test_billing_day_not_reached_stays_eligible() {
        let mut registry = Registry::new();
        let mut ledger = Ledger::new();
        registry.add(netflix(20));

        // The 10th: day 20 hasn't arrived, nothing happens
        let early = BillingService::new(&mut registry, &mut ledger).apply_due(at(2025, 3, 10));
        assert!(early.is_empty());
        assert!(registry.subscriptions()[0].last_charged.is_none());

        // The 25th of the same month: now it charges
        let later = BillingService::new(&mut registry, &mut ledger).apply_due(at(2025, 3, 25));
        assert_eq!(later.len(), 1);
        assert_eq!(later[0].date.day(), 20);
    }

    #[test]
    fn test_mixed_registry_walked_independently() {
        let mut registry = Registry::new();
        let mut ledger = Ledger::new();

        registry.add(netflix(5)); // due
        registry.add({
            let mut paused = netflix(5);
            paused.name = "Paused".to_string();
            paused.active = false;
            paused
        });
        registry.add({
            let mut late = netflix(28);
            late.name = "Gym".to_string();
            late
        }); // not due yet

        let charged = BillingService::new(&mut registry, &mut ledger).apply_due(at(2025, 3, 10));

        assert_eq!(charged.len(), 1);
        assert_eq!(charged[0].title, "Netflix");
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn test_february_day_28_is_valid() {
        let mut registry = Registry::new();
        let mut ledger = Ledger::new();
        registry.add(netflix(28));

        let charged = BillingService::new(&mut registry, &mut ledger).apply_due(at(2025, 2, 28));

        assert_eq!(charged.len(), 1);
        assert_eq!(
            charged[0].date.date(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }
}
