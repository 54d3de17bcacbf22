//! Idempotent listener bindings.
//!
//! Each feature owns a [`Subscription`] and drives it with a boolean on every
//! configuration change. A subscription only talks to the host on a real
//! transition, so a listener is never bound twice.

use crate::host::{Listener, Listeners};

/// One listener plus whether it is currently bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    listener: Listener,
    active: bool,
}

impl Subscription {
    pub const fn new(listener: Listener) -> Self {
        Self {
            listener,
            active: false,
        }
    }

    pub fn listener(&self) -> Listener {
        self.listener
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bring the binding in line with `enabled`.
    pub fn set<L: Listeners + ?Sized>(&mut self, host: &mut L, enabled: bool) {
        if self.active == enabled {
            return;
        }
        if enabled {
            host.bind(self.listener);
        } else {
            host.unbind(self.listener);
        }
        self.active = enabled;
        tracing::debug!(listener = ?self.listener, enabled, "listener binding changed");
    }

    /// Re-attach after the element behind the listener was replaced.
    pub fn refresh<L: Listeners + ?Sized>(&mut self, host: &mut L, enabled: bool) {
        self.set(host, false);
        self.set(host, enabled);
    }
}

/// Several listeners toggled together by one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new(listeners: &[Listener]) -> Self {
        Self {
            subscriptions: listeners.iter().copied().map(Subscription::new).collect(),
        }
    }

    pub fn set<L: Listeners + ?Sized>(&mut self, host: &mut L, enabled: bool) {
        for subscription in &mut self.subscriptions {
            subscription.set(host, enabled);
        }
    }

    pub fn refresh<L: Listeners + ?Sized>(&mut self, host: &mut L, enabled: bool) {
        for subscription in &mut self.subscriptions {
            subscription.refresh(host, enabled);
        }
    }

    /// Whether `listener` belongs to this set and is bound.
    pub fn is_bound(&self, listener: Listener) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.listener() == listener && s.is_active())
    }
}
