//! Radio group component for single-selection from multiple options
//!
//! Each option behaves as an exclusive control: selecting it is a one-way
//! transition for direct interaction, so clicking the already-selected
//! option is a blocked no-op. Deselection only ever happens through
//! reconciliation, which is exactly what the group does to the previous
//! selection when a new option commits.
//!
//! # Example
//!
//! ```rust
//! use formant_controls::prelude::*;
//!
//! let mut colors = radio_group("color")
//!     .option("red", "Red")
//!     .option("green", "Green")
//!     .option("blue", "Blue")
//!     .on_change(|_, value| println!("Selected: {}", value))
//!     .build();
//!
//! let event = InteractionEvent::pointer_up(1, 0.0, 0.0);
//! colors.select(&event, "green");
//! assert_eq!(colors.selected().as_deref(), Some("green"));
//! ```

use std::sync::Arc;

use formant_core::{
    ControlFlags, ControlId, ControlRuntime, DispatchOutcome, Dispatcher, InteractionEvent,
};

/// Selection callback, fired with the newly selected option value
pub type SelectionCallback = Arc<dyn Fn(&InteractionEvent, &str) + Send + Sync>;

/// A radio option with value and label
#[derive(Clone)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// Radio group configuration
#[derive(Clone, Default)]
pub struct RadioGroupConfig {
    /// Identifier, opaque to the engine
    pub name: String,
    /// The selectable options, in display order
    pub options: Vec<RadioOption>,
    /// External selected value; presence marks the group controlled
    pub selected: Option<String>,
    /// Disable every option
    pub disabled: bool,
    /// Post-toggle notification, fired with the new selection
    pub on_change: Option<SelectionCallback>,
}

impl RadioGroupConfig {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A live radio group instance
///
/// Owns one value store per option through a [`ControlRuntime`]; the group
/// is the single external owner those stores reconcile against.
pub struct RadioGroup {
    config: RadioGroupConfig,
    runtime: ControlRuntime<bool>,
    ids: Vec<(String, ControlId)>,
}

impl RadioGroup {
    fn with_config(config: RadioGroupConfig) -> Self {
        let mut runtime = ControlRuntime::new();
        let mut ids = Vec::with_capacity(config.options.len());
        for option in &config.options {
            let seed = config
                .selected
                .as_ref()
                .map(|selected| *selected == option.value);
            let id = runtime.create(option.value.clone(), seed.as_ref());
            ids.push((option.value.clone(), id));
        }
        Self {
            config,
            runtime,
            ids,
        }
    }

    fn option(&self, value: &str) -> Option<&RadioOption> {
        self.config.options.iter().find(|o| o.value == value)
    }

    fn option_flags(&self, option: &RadioOption) -> ControlFlags {
        ControlFlags::new()
            .disabled(self.config.disabled || option.disabled)
            .exclusive(true)
    }

    /// Route a selection interaction into the engine
    ///
    /// Clicking the already-selected option is blocked by exclusivity and
    /// fires nothing. A committed selection forces every other option off
    /// via reconciliation before returning.
    pub fn select(&mut self, event: &InteractionEvent, value: &str) -> DispatchOutcome {
        let Some(option) = self.option(value) else {
            tracing::warn!("{}: unknown radio option `{}`", self.config.name, value);
            return DispatchOutcome::Blocked;
        };
        let flags = self.option_flags(option);
        let Some(store) = self.runtime.lookup(value).and_then(|id| self.runtime.store(id)) else {
            return DispatchOutcome::Blocked;
        };
        let store = store.clone();

        let mut dispatcher = Dispatcher::new();
        if let Some(callback) = self.config.on_change.clone() {
            let selected = value.to_string();
            dispatcher = dispatcher
                .on_change(Arc::new(move |event, _| callback(event, &selected)));
        }

        let outcome = dispatcher.toggle(event, flags, &store);
        if outcome.is_committed() {
            for (other, id) in &self.ids {
                if other != value {
                    self.runtime.reconcile(*id, Some(&false));
                }
            }
        }
        outcome
    }

    /// Apply an owner-driven selection
    ///
    /// `Some` forces exactly that option on and every other option off;
    /// `None` releases all options to internal control without touching
    /// their values.
    pub fn reconcile(&mut self, selected: Option<&str>) {
        for (value, id) in &self.ids {
            match selected {
                Some(chosen) => self.runtime.reconcile(*id, Some(&(value == chosen))),
                None => self.runtime.reconcile(*id, None),
            }
        }
        self.config.selected = selected.map(str::to_string);
    }

    /// The currently selected option value, if any
    pub fn selected(&self) -> Option<String> {
        self.ids
            .iter()
            .find(|(_, id)| self.runtime.read(*id) == Some(true))
            .map(|(value, _)| value.clone())
    }

    /// Whether the given option is currently selected
    pub fn is_selected(&self, value: &str) -> bool {
        self.runtime
            .lookup(value)
            .and_then(|id| self.runtime.read(id))
            == Some(true)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &RadioGroupConfig {
        &self.config
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Builder for creating RadioGroup components with a fluent API
pub struct RadioGroupBuilder {
    config: RadioGroupConfig,
}

impl RadioGroupBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: RadioGroupConfig::new(name),
        }
    }

    /// Add an option to the group
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.config.options.push(RadioOption {
            value: value.into(),
            label: label.into(),
            disabled: false,
        });
        self
    }

    /// Add a disabled option to the group
    pub fn option_disabled(
        mut self,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.config.options.push(RadioOption {
            value: value.into(),
            label: label.into(),
            disabled: true,
        });
        self
    }

    /// Supply an external selected value (marks the group controlled)
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.config.selected = Some(value.into());
        self
    }

    /// Disable every option
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set the selection callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&InteractionEvent, &str) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(callback));
        self
    }

    /// Build the live radio group instance
    pub fn build(self) -> RadioGroup {
        RadioGroup::with_config(self.config)
    }
}

/// Create a radio group builder
pub fn radio_group(name: impl Into<String>) -> RadioGroupBuilder {
    RadioGroupBuilder::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn event() -> InteractionEvent {
        InteractionEvent::pointer_up(1, 0.0, 0.0)
    }

    fn sizes() -> RadioGroupBuilder {
        radio_group("size")
            .option("sm", "Small")
            .option("md", "Medium")
            .option("lg", "Large")
    }

    #[test]
    fn test_nothing_selected_initially() {
        let group = sizes().build();
        assert_eq!(group.selected(), None);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut group = sizes().build();
        group.select(&event(), "sm");
        assert!(group.is_selected("sm"));

        group.select(&event(), "lg");
        assert!(group.is_selected("lg"));
        assert!(!group.is_selected("sm"));
        assert_eq!(group.selected().as_deref(), Some("lg"));
    }

    #[test]
    fn test_reselecting_is_blocked_and_silent() {
        let fired = Arc::new(Mutex::new(0u32));
        let fired_in_cb = fired.clone();
        let mut group = sizes()
            .on_change(move |_, _| *fired_in_cb.lock().unwrap() += 1)
            .build();

        assert_eq!(group.select(&event(), "md"), DispatchOutcome::Committed);
        assert_eq!(group.select(&event(), "md"), DispatchOutcome::Blocked);
        assert_eq!(*fired.lock().unwrap(), 1);
        assert!(group.is_selected("md"));
    }

    #[test]
    fn test_on_change_reports_new_value() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_in_cb = seen.clone();
        let mut group = sizes()
            .on_change(move |_, value| seen_in_cb.lock().unwrap().push(value.to_string()))
            .build();

        group.select(&event(), "sm");
        group.select(&event(), "md");
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &["sm".to_string(), "md".to_string()]
        );
    }

    #[test]
    fn test_controlled_seed_and_owner_reconcile() {
        let mut group = sizes().selected("md").build();
        assert_eq!(group.selected().as_deref(), Some("md"));

        // Owner moves the selection; previous option is forced off
        group.reconcile(Some("lg"));
        assert!(group.is_selected("lg"));
        assert!(!group.is_selected("md"));

        // Owner clears control entirely
        group.reconcile(None);
        assert_eq!(group.selected().as_deref(), Some("lg"));
    }

    #[test]
    fn test_group_disabled_blocks_every_option() {
        let mut group = sizes().disabled(true).build();
        assert_eq!(group.select(&event(), "sm"), DispatchOutcome::Blocked);
        assert_eq!(group.selected(), None);
    }

    #[test]
    fn test_option_disabled_blocks_only_that_option() {
        let mut group = radio_group("plan")
            .option("free", "Free")
            .option_disabled("pro", "Pro")
            .build();
        assert_eq!(group.select(&event(), "pro"), DispatchOutcome::Blocked);
        assert_eq!(group.select(&event(), "free"), DispatchOutcome::Committed);
    }

    #[test]
    fn test_unknown_option_is_blocked() {
        let mut group = sizes().build();
        assert_eq!(group.select(&event(), "xl"), DispatchOutcome::Blocked);
    }
}
