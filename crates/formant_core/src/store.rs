//! Per-instance value ownership and reconciliation
//!
//! Each widget instance owns exactly one [`ValueStore`]: the single source of
//! truth for that instance's value at any instant. The store is mutated from
//! two directions and never mixes them:
//!
//! - **Reconciliation** (owner-driven): the hosting layer pushes the external
//!   value whenever new configuration arrives. *Presence* of the external
//!   value, not its truthiness, is what marks the instance controlled; a
//!   present `false` or empty string is still controlled input.
//! - **Commit** (user-driven): the dispatcher writes the flipped value after
//!   an eligibility check passed.
//!
//! A commit while controlled is allowed and takes effect until the owner's
//! next reconcile resynchronizes. This is the optimistic local update the
//! hosting contract calls for.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// Authoritative value state for one widget instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueStore<T> {
    current: T,
    controlled: bool,
}

impl<T: Clone + PartialEq + Debug> ValueStore<T> {
    /// Create a store with an explicit initial value, uncontrolled
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            controlled: false,
        }
    }

    /// Seed a store from an optional external value
    ///
    /// `Some` seeds a controlled store with that value; `None` seeds an
    /// uncontrolled store with the type default (`false` for toggles, empty
    /// for text).
    pub fn seeded(external: Option<&T>) -> Self
    where
        T: Default,
    {
        match external {
            Some(value) => Self {
                current: value.clone(),
                controlled: true,
            },
            None => Self {
                current: T::default(),
                controlled: false,
            },
        }
    }

    /// Apply an owner-driven update
    ///
    /// A present value overwrites the current value unconditionally and marks
    /// the store controlled, regardless of what was committed internally. An
    /// absent value leaves the current value untouched and marks the store
    /// uncontrolled. Idempotent: repeating the same present value changes
    /// nothing.
    pub fn reconcile(&mut self, external: Option<&T>) {
        match external {
            Some(value) => {
                if self.current != *value {
                    tracing::debug!("reconcile overwrites {:?} -> {:?}", self.current, value);
                    self.current = value.clone();
                }
                self.controlled = true;
            }
            None => {
                self.controlled = false;
            }
        }
    }

    /// Apply a user-driven commit
    ///
    /// Callers must only invoke this after an eligibility check passed. The
    /// write goes through even while controlled; the owner's next reconcile
    /// overrides it.
    pub fn commit(&mut self, next: T) {
        if self.current != next {
            tracing::debug!("commit {:?} -> {:?}", self.current, next);
        }
        self.current = next;
    }

    /// Read the current value
    pub fn read(&self) -> T {
        self.current.clone()
    }

    /// Whether the last reconcile carried a present external value
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }
}

impl<T: Clone + PartialEq + Debug + Default> Default for ValueStore<T> {
    fn default() -> Self {
        Self::seeded(None)
    }
}

/// Shared handle to a value store
///
/// The dispatcher and the hosting layer hold the same store through this
/// handle; notification callbacks may read it mid-dispatch.
pub type SharedValueStore<T> = Arc<Mutex<ValueStore<T>>>;

/// Wrap a store into a shared handle
pub fn shared<T>(store: ValueStore<T>) -> SharedValueStore<T> {
    Arc::new(Mutex::new(store))
}
