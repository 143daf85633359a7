//! Switch component for boolean toggle
//!
//! The headless toggle control: same engine as the checkbox, without the
//! exclusive or validation flags. A switch is either on or off, enabled or
//! disabled.
//!
//! # Example
//!
//! ```rust
//! use formant_controls::prelude::*;
//!
//! let notifications = switch("notifications")
//!     .label("Enable notifications")
//!     .on_change(|_, snapshot| println!("Switch: {}", snapshot.value))
//!     .build();
//!
//! let event = InteractionEvent::pointer_up(1, 0.0, 0.0);
//! notifications.toggle(&event);
//! assert!(notifications.is_on());
//! ```

use std::sync::Arc;

use formant_core::{
    shared, ControlCallback, ControlFlags, DispatchOutcome, Dispatcher, InteractionEvent,
    SharedValueStore, Snapshot, StyleVariant, ValueStore,
};

/// Switch configuration
#[derive(Clone, Default)]
pub struct SwitchConfig {
    /// Identifier, opaque to the engine
    pub name: String,
    /// Label text (opaque display string)
    pub label: Option<String>,
    /// External on/off value; presence marks the control controlled
    pub on: Option<bool>,
    /// Whether disabled
    pub disabled: bool,
    /// Pre-toggle notification slot
    pub on_click: Option<ControlCallback<bool>>,
    /// Post-toggle notification slot
    pub on_change: Option<ControlCallback<bool>>,
}

impl SwitchConfig {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The engine flags this configuration resolves to
    pub fn flags(&self) -> ControlFlags {
        ControlFlags::new().disabled(self.disabled)
    }

    /// Copy of this configuration with a different external value
    pub fn with_on(mut self, on: Option<bool>) -> Self {
        self.on = on;
        self
    }
}

/// A live switch instance
pub struct Switch {
    config: SwitchConfig,
    store: SharedValueStore<bool>,
    dispatcher: Dispatcher<bool>,
}

impl Switch {
    fn with_config(config: SwitchConfig) -> Self {
        let store = shared(ValueStore::seeded(config.on.as_ref()));
        let dispatcher = Dispatcher::new()
            .with_slots(config.on_click.clone(), config.on_change.clone());
        Self {
            config,
            store,
            dispatcher,
        }
    }

    /// Route a user interaction into the engine
    pub fn toggle(&self, event: &InteractionEvent) -> DispatchOutcome {
        self.dispatcher.toggle(event, self.config.flags(), &self.store)
    }

    /// Apply a fresh configuration pushed by the owner
    pub fn reconcile(&mut self, config: SwitchConfig) {
        self.store.lock().unwrap().reconcile(config.on.as_ref());
        self.dispatcher = Dispatcher::new()
            .with_slots(config.on_click.clone(), config.on_change.clone());
        self.config = config;
    }

    /// Current on/off value
    pub fn is_on(&self) -> bool {
        self.store.lock().unwrap().read()
    }

    /// Whether the value is currently owner-driven
    pub fn is_controlled(&self) -> bool {
        self.store.lock().unwrap().is_controlled()
    }

    /// Visual variant; a switch is standard or disabled
    pub fn variant(&self) -> StyleVariant {
        StyleVariant::resolve(self.config.flags())
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Shared handle to the value store
    pub fn store(&self) -> &SharedValueStore<bool> {
        &self.store
    }
}

/// Builder for creating Switch components with a fluent API
pub struct SwitchBuilder {
    config: SwitchConfig,
}

impl SwitchBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: SwitchConfig::new(name),
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Supply an external on/off value (marks the control controlled)
    pub fn on(mut self, on: bool) -> Self {
        self.config.on = Some(on);
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set the pre-toggle notification slot
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(&InteractionEvent, &Snapshot<bool>) + Send + Sync + 'static,
    {
        self.config.on_click = Some(Arc::new(callback));
        self
    }

    /// Set the post-toggle notification slot
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&InteractionEvent, &Snapshot<bool>) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(callback));
        self
    }

    /// Build the live switch instance
    pub fn build(self) -> Switch {
        Switch::with_config(self.config)
    }
}

/// Create a switch builder
pub fn switch(name: impl Into<String>) -> SwitchBuilder {
    SwitchBuilder::new(name)
}
