//! Checkbox component
//!
//! A headless checkbox: it owns the value state, eligibility, and
//! notification ordering, and leaves markup to the hosting layer. The
//! checked value is controlled when the configuration carries `Some`,
//! uncontrolled otherwise; a present `false` is controlled input.
//!
//! # Example
//!
//! ```rust
//! use formant_controls::prelude::*;
//!
//! let mut remember = checkbox("remember-me")
//!     .label("Remember me")
//!     .on_change(|_, snapshot| println!("Checked: {}", snapshot.value))
//!     .build();
//!
//! let event = InteractionEvent::pointer_up(1, 0.0, 0.0);
//! remember.click(&event);
//! assert!(remember.is_checked());
//!
//! // New configuration arrives from the owner: reconcile
//! let next = remember.config().clone().with_checked(Some(false));
//! remember.reconcile(next);
//! assert!(!remember.is_checked());
//! ```

use std::sync::Arc;

use formant_core::{
    shared, ControlCallback, ControlFlags, DispatchOutcome, Dispatcher, InteractionEvent,
    SharedValueStore, Snapshot, StyleVariant, ValueStore,
};

/// Checkbox configuration
///
/// Supplied anew by the hosting layer on every update cycle; the component
/// keeps the latest copy only as a convenience for flag resolution.
#[derive(Clone, Default)]
pub struct CheckboxConfig {
    /// Identifier, opaque to the engine
    pub name: String,
    /// Label text shown next to the box (opaque display string)
    pub label: Option<String>,
    /// External checked value; presence marks the control controlled
    pub checked: Option<bool>,
    /// Whether disabled
    pub disabled: bool,
    /// Whether the control participates in validation styling
    pub required: bool,
    /// Whether the control is currently failing validation
    pub error: bool,
    /// Radio-like: once checked, direct interaction cannot uncheck it
    pub exclusive: bool,
    /// Pre-toggle notification slot
    pub on_click: Option<ControlCallback<bool>>,
    /// Post-toggle notification slot
    pub on_change: Option<ControlCallback<bool>>,
}

impl CheckboxConfig {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The engine flags this configuration resolves to
    pub fn flags(&self) -> ControlFlags {
        ControlFlags::new()
            .disabled(self.disabled)
            .required(self.required)
            .error(self.error)
            .exclusive(self.exclusive)
    }

    /// Copy of this configuration with a different external value
    pub fn with_checked(mut self, checked: Option<bool>) -> Self {
        self.checked = checked;
        self
    }
}

/// A live checkbox instance
pub struct Checkbox {
    config: CheckboxConfig,
    store: SharedValueStore<bool>,
    dispatcher: Dispatcher<bool>,
}

impl Checkbox {
    fn with_config(config: CheckboxConfig) -> Self {
        let store = shared(ValueStore::seeded(config.checked.as_ref()));
        let dispatcher = Dispatcher::new()
            .with_slots(config.on_click.clone(), config.on_change.clone());
        Self {
            config,
            store,
            dispatcher,
        }
    }

    /// Route a user interaction into the engine
    ///
    /// Blocked interactions (disabled, or an already-checked exclusive box)
    /// return [`DispatchOutcome::Blocked`] silently.
    pub fn click(&self, event: &InteractionEvent) -> DispatchOutcome {
        self.dispatcher.toggle(event, self.config.flags(), &self.store)
    }

    /// Apply a fresh configuration pushed by the owner
    ///
    /// A present `checked` overwrites the current value unconditionally; an
    /// absent one leaves the internal value in charge.
    pub fn reconcile(&mut self, config: CheckboxConfig) {
        self.store
            .lock()
            .unwrap()
            .reconcile(config.checked.as_ref());
        self.dispatcher = Dispatcher::new()
            .with_slots(config.on_click.clone(), config.on_change.clone());
        self.config = config;
    }

    /// Current checked value
    pub fn is_checked(&self) -> bool {
        self.store.lock().unwrap().read()
    }

    /// Whether the value is currently owner-driven
    pub fn is_controlled(&self) -> bool {
        self.store.lock().unwrap().is_controlled()
    }

    /// Visual variant for the current configuration
    pub fn variant(&self) -> StyleVariant {
        StyleVariant::resolve(self.config.flags())
    }

    /// The flags merged with the current value
    pub fn snapshot(&self) -> Snapshot<bool> {
        Snapshot {
            flags: self.config.flags(),
            value: self.is_checked(),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &CheckboxConfig {
        &self.config
    }

    /// Shared handle to the value store (for hosts that reconcile directly)
    pub fn store(&self) -> &SharedValueStore<bool> {
        &self.store
    }
}

/// Builder for creating Checkbox components with a fluent API
pub struct CheckboxBuilder {
    config: CheckboxConfig,
}

impl CheckboxBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: CheckboxConfig::new(name),
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Supply an external checked value (marks the control controlled)
    pub fn checked(mut self, checked: bool) -> Self {
        self.config.checked = Some(checked);
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Mark the control as validated (styled success/error)
    pub fn required(mut self) -> Self {
        self.config.required = true;
        self
    }

    /// Set the validation error flag
    pub fn error(mut self, error: bool) -> Self {
        self.config.error = error;
        self
    }

    /// Make the control radio-like: checking is one-way for interactions
    pub fn exclusive(mut self) -> Self {
        self.config.exclusive = true;
        self
    }

    /// Set the pre-toggle notification slot
    ///
    /// Fires with the value as it was before the flip.
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(&InteractionEvent, &Snapshot<bool>) + Send + Sync + 'static,
    {
        self.config.on_click = Some(Arc::new(callback));
        self
    }

    /// Set the post-toggle notification slot
    ///
    /// Fires with the value as it will become, before the store is written.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&InteractionEvent, &Snapshot<bool>) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(callback));
        self
    }

    /// Build the live checkbox instance
    pub fn build(self) -> Checkbox {
        Checkbox::with_config(self.config)
    }
}

/// Create a checkbox builder
pub fn checkbox(name: impl Into<String>) -> CheckboxBuilder {
    CheckboxBuilder::new(name)
}
