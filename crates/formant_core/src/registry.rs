//! Control instance runtime
//!
//! Owns the value stores for a set of widget instances. Each instance gets
//! exactly one store, created when the instance is instantiated and removed
//! when it is destroyed; the arena is what makes that ownership explicit.
//! Instances are addressable both by their [`ControlId`] handle and by the
//! `name` identifier the hosting configuration carries.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::fmt::Debug;

use crate::store::{shared, SharedValueStore, ValueStore};

new_key_type! {
    /// Unique identifier for a control instance
    pub struct ControlId;
}

/// Runtime that manages the value stores of live control instances
pub struct ControlRuntime<T> {
    stores: SlotMap<ControlId, SharedValueStore<T>>,
    names: FxHashMap<String, ControlId>,
}

impl<T: Clone + PartialEq + Debug + Default> ControlRuntime<T> {
    pub fn new() -> Self {
        Self {
            stores: SlotMap::with_key(),
            names: FxHashMap::default(),
        }
    }

    /// Create a control instance, seeding its store from the external value
    ///
    /// If the name is already taken it now addresses the new instance; the
    /// old instance stays alive under its id.
    pub fn create(&mut self, name: impl Into<String>, external: Option<&T>) -> ControlId {
        let name = name.into();
        let id = self.stores.insert(shared(ValueStore::seeded(external)));
        if let Some(previous) = self.names.insert(name.clone(), id) {
            tracing::debug!("control name `{}` remapped from {:?}", name, previous);
        }
        id
    }

    /// Get the store handle for an instance
    pub fn store(&self, id: ControlId) -> Option<&SharedValueStore<T>> {
        self.stores.get(id)
    }

    /// Look up an instance by its configured name
    pub fn lookup(&self, name: &str) -> Option<ControlId> {
        self.names.get(name).copied()
    }

    /// Reconcile an instance's store against a fresh external value
    pub fn reconcile(&self, id: ControlId, external: Option<&T>) {
        if let Some(store) = self.stores.get(id) {
            store.lock().unwrap().reconcile(external);
        }
    }

    /// Read an instance's current value
    pub fn read(&self, id: ControlId) -> Option<T> {
        self.stores.get(id).map(|store| store.lock().unwrap().read())
    }

    /// Remove an instance, returning its store
    pub fn remove(&mut self, id: ControlId) -> Option<SharedValueStore<T>> {
        let store = self.stores.remove(id);
        if store.is_some() {
            self.names.retain(|_, mapped| *mapped != id);
        }
        store
    }

    /// Iterate over live instances
    pub fn iter(&self) -> impl Iterator<Item = (ControlId, &SharedValueStore<T>)> {
        self.stores.iter()
    }

    /// Number of live instances
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Whether the runtime has no instances
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl<T: Clone + PartialEq + Debug + Default> Default for ControlRuntime<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_read() {
        let mut runtime = ControlRuntime::<bool>::new();
        let a = runtime.create("accept-terms", None);
        let b = runtime.create("newsletter", Some(&true));

        assert_eq!(runtime.len(), 2);
        assert_eq!(runtime.read(a), Some(false));
        assert_eq!(runtime.read(b), Some(true));
    }

    #[test]
    fn test_lookup_by_name() {
        let mut runtime = ControlRuntime::<String>::new();
        let id = runtime.create("username", Some(&String::from("egg")));
        assert_eq!(runtime.lookup("username"), Some(id));
        assert_eq!(runtime.lookup("password"), None);
    }

    #[test]
    fn test_reconcile_through_runtime() {
        let mut runtime = ControlRuntime::<bool>::new();
        let id = runtime.create("notify", None);
        runtime.reconcile(id, Some(&true));
        assert_eq!(runtime.read(id), Some(true));
        assert!(runtime.store(id).unwrap().lock().unwrap().is_controlled());
    }

    #[test]
    fn test_remove_drops_instance_and_name() {
        let mut runtime = ControlRuntime::<bool>::new();
        let id = runtime.create("transient", None);
        assert!(runtime.remove(id).is_some());
        assert!(runtime.is_empty());
        assert_eq!(runtime.lookup("transient"), None);
        assert_eq!(runtime.read(id), None);
    }

    #[test]
    fn test_name_remap_keeps_old_instance_alive() {
        let mut runtime = ControlRuntime::<bool>::new();
        let first = runtime.create("choice", Some(&true));
        let second = runtime.create("choice", None);

        assert_eq!(runtime.lookup("choice"), Some(second));
        assert_eq!(runtime.read(first), Some(true));
        assert_eq!(runtime.len(), 2);
    }
}
