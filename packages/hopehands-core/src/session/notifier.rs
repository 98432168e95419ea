//! Auth change broadcast
//!
//! # Guarantees
//!
//! - **Synchronous**: `fire` runs every listener before it returns
//! - **Ordered**: listeners run in subscription order
//! - **Snapshot**: listeners registered while a signal is being delivered
//!   only see later signals
//! - **Scoped**: dropping a [`Subscription`] removes its listener
//!
//! Signals carry no session data. Listeners read the store themselves.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::storage::is_session_key;

/// What triggered a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSignal {
    /// The session was written or cleared in this tab
    Changed,
    /// Another tab changed the shared storage. `key` is `None` when the
    /// whole storage was cleared.
    StorageChanged { key: Option<String> },
}

type Listener = Rc<dyn Fn(&AuthSignal)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// In-tab broadcast of session changes
#[derive(Clone, Default)]
pub struct AuthNotifier {
    registry: Rc<RefCell<Registry>>,
}

impl AuthNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the returned
    /// [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&AuthSignal) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Notify every listener that the session changed in this tab.
    ///
    /// Returns the number of listeners invoked.
    pub fn fire(&self) -> usize {
        self.dispatch(&AuthSignal::Changed)
    }

    /// Forward a storage change made by another tab. Changes to keys outside
    /// the session layout are dropped.
    pub fn relay_storage_change(&self, key: Option<&str>) -> usize {
        if let Some(key) = key {
            if !is_session_key(key) {
                return 0;
            }
        }

        self.dispatch(&AuthSignal::StorageChanged {
            key: key.map(str::to_string),
        })
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    fn dispatch(&self, signal: &AuthSignal) -> usize {
        // Release the borrow before calling out so listeners may re-enter.
        let snapshot: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        debug!(?signal, listeners = snapshot.len(), "Dispatching auth signal");

        for listener in &snapshot {
            listener(signal);
        }
        snapshot.len()
    }
}

/// Registration handle returned by [`AuthNotifier::subscribe`]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Unsubscribe now rather than at end of scope
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fire_invokes_each_listener_once() {
        let notifier = AuthNotifier::new();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));

        let a2 = a.clone();
        let _sa = notifier.subscribe(move |_| a2.set(a2.get() + 1));
        let b2 = b.clone();
        let _sb = notifier.subscribe(move |_| b2.set(b2.get() + 1));

        assert_eq!(notifier.fire(), 2);
        // observed before fire() returned
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 1);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let notifier = AuthNotifier::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let subs: Vec<Subscription> = (0..3)
            .map(|i| {
                let order = order.clone();
                notifier.subscribe(move |_| order.borrow_mut().push(i))
            })
            .collect();

        notifier.fire();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        drop(subs);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let notifier = AuthNotifier::new();
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        let sub = notifier.subscribe(move |_| h.set(h.get() + 1));
        assert_eq!(notifier.listener_count(), 1);

        drop(sub);
        assert_eq!(notifier.listener_count(), 0);
        assert_eq!(notifier.fire(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let notifier = AuthNotifier::new();
        let sub = notifier.subscribe(|_| {});
        sub.unsubscribe();
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outlives_notifier() {
        let notifier = AuthNotifier::new();
        let sub = notifier.subscribe(|_| {});
        drop(notifier);
        drop(sub);
    }

    #[test]
    fn test_listener_may_subscribe_during_dispatch() {
        let notifier = AuthNotifier::new();
        let late = Rc::new(RefCell::new(Vec::new()));
        let late_hits = Rc::new(Cell::new(0));

        let n = notifier.clone();
        let l = late.clone();
        let lh = late_hits.clone();
        let _sub = notifier.subscribe(move |_| {
            let lh = lh.clone();
            l.borrow_mut()
                .push(n.subscribe(move |_| lh.set(lh.get() + 1)));
        });

        // the listener added during delivery is not called for this signal
        assert_eq!(notifier.fire(), 1);
        assert_eq!(late_hits.get(), 0);

        notifier.fire();
        assert_eq!(late_hits.get(), 1);
    }

    #[test]
    fn test_relay_filters_foreign_keys() {
        let notifier = AuthNotifier::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = seen.clone();
        let _sub = notifier.subscribe(move |signal| s.borrow_mut().push(signal.clone()));

        assert_eq!(notifier.relay_storage_change(Some("theme")), 0);
        assert_eq!(notifier.relay_storage_change(Some("authToken")), 1);
        assert_eq!(notifier.relay_storage_change(None), 1);

        assert_eq!(
            *seen.borrow(),
            vec![
                AuthSignal::StorageChanged {
                    key: Some("authToken".into())
                },
                AuthSignal::StorageChanged { key: None },
            ]
        );
    }
}
