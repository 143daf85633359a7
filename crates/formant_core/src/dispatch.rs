//! Interaction dispatch
//!
//! Orchestrates one user interaction into eligibility check, notifications,
//! and value commit. The ordering is a strict contract:
//!
//! 1. read the current value
//! 2. blocked interactions return silently: no notification, no mutation
//! 3. pre-toggle notification fires with the value *as it was*
//! 4. post-toggle notification fires with the value *as it will become*
//! 5. the store commit lands last
//!
//! The post-toggle callback sees the new value as a parameter even though
//! the store has not been written yet when it runs; callbacks must not read
//! the store and expect the new value there.
//!
//! Execution is synchronous throughout: callbacks return before the dispatch
//! call returns, and one interaction is processed to completion before the
//! next is accepted.

use std::fmt::Debug;
use std::sync::Arc;

use crate::config::ControlFlags;
use crate::eligibility::{can_edit, can_toggle};
use crate::events::InteractionEvent;
use crate::store::SharedValueStore;

/// Configuration flags merged with a value, as handed to callbacks
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<T> {
    pub flags: ControlFlags,
    pub value: T,
}

/// Notification callback slot
///
/// Receives the originating event, unmodified, and the snapshot for the
/// stage it fires at.
pub type ControlCallback<T> = Arc<dyn Fn(&InteractionEvent, &Snapshot<T>) + Send + Sync>;

/// What a dispatch call did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Eligibility passed; notifications fired and the value was committed
    Committed,
    /// Eligibility failed; nothing happened (a defined no-op, not an error)
    Blocked,
}

impl DispatchOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, DispatchOutcome::Committed)
    }
}

/// Dispatcher for one control's notification slots
///
/// `on_click` is the pre-toggle slot, `on_change` the post-toggle slot,
/// matching the hosting contract. Absent slots are silently skipped.
#[derive(Clone, Default)]
pub struct Dispatcher<T> {
    pre_toggle: Option<ControlCallback<T>>,
    post_toggle: Option<ControlCallback<T>>,
}

impl<T: Clone + Debug> Dispatcher<T> {
    pub fn new() -> Self {
        Self {
            pre_toggle: None,
            post_toggle: None,
        }
    }

    /// Set the pre-toggle notification slot
    pub fn on_click(mut self, callback: ControlCallback<T>) -> Self {
        self.pre_toggle = Some(callback);
        self
    }

    /// Set the post-toggle notification slot
    pub fn on_change(mut self, callback: ControlCallback<T>) -> Self {
        self.post_toggle = Some(callback);
        self
    }

    /// Set either slot from an `Option`, replacing the previous value
    pub fn with_slots(
        mut self,
        on_click: Option<ControlCallback<T>>,
        on_change: Option<ControlCallback<T>>,
    ) -> Self {
        self.pre_toggle = on_click;
        self.post_toggle = on_change;
        self
    }

    /// Fire both notifications, then commit
    ///
    /// Locks on the store are scoped so that callbacks may read it while
    /// they run; the commit is taken out only after both have returned.
    fn notify_and_commit(
        &self,
        event: &InteractionEvent,
        flags: ControlFlags,
        store: &SharedValueStore<T>,
        current: T,
        next: T,
    ) where
        T: PartialEq,
    {
        if let Some(callback) = &self.pre_toggle {
            callback(
                event,
                &Snapshot {
                    flags,
                    value: current,
                },
            );
        }
        if let Some(callback) = &self.post_toggle {
            callback(
                event,
                &Snapshot {
                    flags,
                    value: next.clone(),
                },
            );
        }
        store.lock().unwrap().commit(next);
    }
}

impl Dispatcher<bool> {
    /// Process a toggle interaction
    pub fn toggle(
        &self,
        event: &InteractionEvent,
        flags: ControlFlags,
        store: &SharedValueStore<bool>,
    ) -> DispatchOutcome {
        let current = store.lock().unwrap().read();
        if !can_toggle(flags, current) {
            tracing::trace!(widget = event.target, current, "toggle blocked");
            return DispatchOutcome::Blocked;
        }

        let next = !current;
        tracing::trace!(widget = event.target, current, next, "toggle dispatched");
        self.notify_and_commit(event, flags, store, current, next);
        DispatchOutcome::Committed
    }
}

impl Dispatcher<String> {
    /// Process a text replacement interaction
    ///
    /// The flip stage reduces to pass-through: the interaction supplies the
    /// replacement value and only `disabled` gates it. Ordering is the same
    /// contract as for toggles.
    pub fn replace(
        &self,
        event: &InteractionEvent,
        flags: ControlFlags,
        store: &SharedValueStore<String>,
        next: impl Into<String>,
    ) -> DispatchOutcome {
        if !can_edit(flags) {
            tracing::trace!(widget = event.target, "edit blocked");
            return DispatchOutcome::Blocked;
        }

        let current = store.lock().unwrap().read();
        let next = next.into();
        tracing::trace!(widget = event.target, ?next, "edit dispatched");
        self.notify_and_commit(event, flags, store, current, next);
        DispatchOutcome::Committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::InteractionEvent;
    use crate::store::{shared, ValueStore};
    use std::sync::Mutex;

    fn event() -> InteractionEvent {
        InteractionEvent::pointer_up(1, 0.0, 0.0)
    }

    #[test]
    fn test_toggle_without_slots_commits() {
        let store = shared(ValueStore::new(false));
        let outcome = Dispatcher::<bool>::new().toggle(&event(), ControlFlags::new(), &store);
        assert!(outcome.is_committed());
        assert!(store.lock().unwrap().read());
    }

    #[test]
    fn test_blocked_toggle_is_silent() {
        let fired = Arc::new(Mutex::new(false));
        let fired_in_cb = fired.clone();
        let store = shared(ValueStore::new(true));
        let dispatcher = Dispatcher::<bool>::new().on_change(Arc::new(move |_, _| {
            *fired_in_cb.lock().unwrap() = true;
        }));

        let outcome = dispatcher.toggle(&event(), ControlFlags::new().disabled(true), &store);
        assert_eq!(outcome, DispatchOutcome::Blocked);
        assert!(store.lock().unwrap().read());
        assert!(!*fired.lock().unwrap());
    }

    #[test]
    fn test_snapshots_carry_pre_and_post_values() {
        let seen: Arc<Mutex<Vec<(&'static str, bool)>>> = Arc::new(Mutex::new(Vec::new()));
        let store = shared(ValueStore::new(true));

        let pre = seen.clone();
        let post = seen.clone();
        let dispatcher = Dispatcher::<bool>::new()
            .on_click(Arc::new(move |_, snapshot| {
                pre.lock().unwrap().push(("click", snapshot.value));
            }))
            .on_change(Arc::new(move |_, snapshot| {
                post.lock().unwrap().push(("change", snapshot.value));
            }));

        dispatcher.toggle(&event(), ControlFlags::new(), &store);
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[("click", true), ("change", false)]
        );
        assert!(!store.lock().unwrap().read());
    }

    #[test]
    fn test_store_unwritten_while_post_toggle_runs() {
        let store = shared(ValueStore::new(false));
        let store_in_cb = store.clone();
        let dispatcher = Dispatcher::<bool>::new().on_change(Arc::new(move |_, snapshot| {
            // Parameter carries the new value; the store still has the old one
            assert!(snapshot.value);
            assert!(!store_in_cb.lock().unwrap().read());
        }));

        dispatcher.toggle(&event(), ControlFlags::new(), &store);
        assert!(store.lock().unwrap().read());
    }

    #[test]
    fn test_toggle_pair_restores_value() {
        let store = shared(ValueStore::new(false));
        let dispatcher = Dispatcher::<bool>::new();
        dispatcher.toggle(&event(), ControlFlags::new(), &store);
        dispatcher.toggle(&event(), ControlFlags::new(), &store);
        assert!(!store.lock().unwrap().read());
    }

    #[test]
    fn test_replace_passes_value_through() {
        let store = shared(ValueStore::new(String::new()));
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_in_cb = seen.clone();
        let dispatcher = Dispatcher::<String>::new().on_change(Arc::new(move |_, snapshot| {
            seen_in_cb.lock().unwrap().push(snapshot.value.clone());
        }));

        let outcome = dispatcher.replace(&event(), ControlFlags::new(), &store, "hello");
        assert!(outcome.is_committed());
        assert_eq!(store.lock().unwrap().read(), "hello");
        assert_eq!(seen.lock().unwrap().as_slice(), &["hello".to_string()]);
    }

    #[test]
    fn test_replace_blocked_when_disabled() {
        let store = shared(ValueStore::new(String::from("kept")));
        let outcome = Dispatcher::<String>::new().replace(
            &event(),
            ControlFlags::new().disabled(true),
            &store,
            "dropped",
        );
        assert_eq!(outcome, DispatchOutcome::Blocked);
        assert_eq!(store.lock().unwrap().read(), "kept");
    }
}
