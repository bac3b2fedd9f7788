//! Subscription service
//!
//! Provides business logic for subscription management: validated creation,
//! pausing/resuming, and deletion. Entries that reach the registry are
//! always valid; the billing routine relies on that.

use tracing::{debug, info};

use crate::error::{PocketFlowError, PocketFlowResult};
use crate::models::{ExpenseCategory, Money, Subscription, SubscriptionId};
use crate::store::Registry;

/// Input for creating a new subscription
#[derive(Debug, Clone)]
pub struct CreateSubscriptionInput {
    pub name: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    pub billing_day: u32,
}

/// Service for subscription management
pub struct SubscriptionService<'a> {
    registry: &'a mut Registry,
}

impl<'a> SubscriptionService<'a> {
    /// Create a new subscription service
    pub fn new(registry: &'a mut Registry) -> Self {
        Self { registry }
    }

    /// Create a new subscription
    pub fn create(&mut self, input: CreateSubscriptionInput) -> PocketFlowResult<Subscription> {
        let subscription = Subscription::new(
            input.name,
            input.amount,
            input.category,
            input.billing_day,
        );

        subscription
            .validate()
            .map_err(|e| PocketFlowError::Validation(e.to_string()))?;

        info!(id = %subscription.id, name = %subscription.name, day = subscription.billing_day, "subscription added");
        self.registry.add(subscription.clone());
        Ok(subscription)
    }

    /// Delete a subscription by ID
    pub fn delete(&mut self, id: SubscriptionId) -> PocketFlowResult<Subscription> {
        let removed = self.registry.delete(id)?;
        debug!(id = %id, "subscription deleted");
        Ok(removed)
    }

    /// Set the active flag of a subscription
    pub fn set_active(&mut self, id: SubscriptionId, active: bool) -> PocketFlowResult<Subscription> {
        let subscription = self
            .registry
            .get_mut(id)
            .ok_or_else(|| PocketFlowError::subscription_not_found(id.to_string()))?;

        subscription.active = active;
        debug!(id = %id, active, "subscription active flag changed");
        Ok(subscription.clone())
    }

    /// All subscriptions in insertion order
    pub fn list(&self) -> Vec<Subscription> {
        self.registry.subscriptions().to_vec()
    }

    /// Count subscriptions
    pub fn count(&self) -> usize {
        self.registry.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, amount: i64, day: u32) -> CreateSubscriptionInput {
        CreateSubscriptionInput {
            name: name.to_string(),
            amount: Money::from_cents(amount),
            category: ExpenseCategory::Entertainment,
            billing_day: day,
        }
    }

    #[test]
    fn test_create_subscription() {
        let mut registry = Registry::new();
        let mut service = SubscriptionService::new(&mut registry);

        let sub = service.create(input("Netflix", 11999, 5)).unwrap();
        assert_eq!(sub.name, "Netflix");
        assert!(sub.active);
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let mut registry = Registry::new();
        let mut service = SubscriptionService::new(&mut registry);

        assert!(service.create(input("", 11999, 5)).unwrap_err().is_validation());
        assert!(service.create(input("Netflix", 0, 5)).unwrap_err().is_validation());
        assert!(service.create(input("Netflix", 11999, 29)).unwrap_err().is_validation());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut registry = Registry::new();
        let mut service = SubscriptionService::new(&mut registry);

        let sub = service.create(input("Netflix", 11999, 5)).unwrap();

        let paused = service.set_active(sub.id, false).unwrap();
        assert!(!paused.active);

        let resumed = service.set_active(sub.id, true).unwrap();
        assert!(resumed.active);
    }

    #[test]
    fn test_set_active_unknown_id() {
        let mut registry = Registry::new();
        let mut service = SubscriptionService::new(&mut registry);

        let err = service.set_active(SubscriptionId::new(), false).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_subscription() {
        let mut registry = Registry::new();
        let mut service = SubscriptionService::new(&mut registry);

        let sub = service.create(input("Netflix", 11999, 5)).unwrap();
        service.delete(sub.id).unwrap();
        assert_eq!(service.count(), 0);
    }
}
