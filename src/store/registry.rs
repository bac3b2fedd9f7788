//! Subscription registry
//!
//! Mutable collection of recurring-charge definitions. Each entry tracks its
//! own last-charged marker, mutated only by the billing routine and by
//! explicit user edits to the active flag.

use crate::error::{PocketFlowError, PocketFlowResult};
use crate::models::{Subscription, SubscriptionId};

/// The full collection of defined subscriptions
#[derive(Debug, Clone, Default)]
pub struct Registry {
    subscriptions: Vec<Subscription>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscription
    pub fn add(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Get a subscription by ID
    pub fn get(&self, id: SubscriptionId) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| s.id == id)
    }

    /// Get a mutable subscription by ID
    pub fn get_mut(&mut self, id: SubscriptionId) -> Option<&mut Subscription> {
        self.subscriptions.iter_mut().find(|s| s.id == id)
    }

    /// Delete a subscription by ID, returning the removed record
    pub fn delete(&mut self, id: SubscriptionId) -> PocketFlowResult<Subscription> {
        let index = self
            .subscriptions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| PocketFlowError::subscription_not_found(id.to_string()))?;
        Ok(self.subscriptions.remove(index))
    }

    /// All subscriptions in insertion order
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// All subscriptions, mutably
    pub fn subscriptions_mut(&mut self) -> &mut [Subscription] {
        &mut self.subscriptions
    }

    /// Number of defined subscriptions
    pub fn count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
