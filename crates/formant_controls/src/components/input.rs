//! Text field component
//!
//! A headless validated text input. The value is controlled when the
//! configuration carries `Some` (an empty string included), uncontrolled
//! otherwise. Editing is pass-through: the interaction supplies the
//! replacement value and only `disabled` gates it. The visual variant is
//! resolved from the declarative flags on every read.
//!
//! # Example
//!
//! ```rust
//! use formant_controls::prelude::*;
//!
//! let password = text_field("password")
//!     .input_type("password")
//!     .placeholder("Enter password")
//!     .required()
//!     .tooltip(PasswordGuidance::for_value("aA1!aA1!"))
//!     .build();
//!
//! let event = InteractionEvent::synthetic(1);
//! password.edit(&event, "hunter2");
//! assert_eq!(password.text(), "hunter2");
//! assert_eq!(password.variant(), StyleVariant::Success);
//! ```

use std::sync::Arc;

use formant_core::{
    report_warnings, shared, validate_text_flags, ConfigWarning, ConfigWarnings,
    ControlCallback, ControlFlags, DispatchOutcome, Dispatcher, InteractionEvent,
    SharedValueStore, Snapshot, StyleVariant, ValueStore,
};

use crate::icons::IconKind;
use crate::tooltip::{SharedTooltipProvider, TooltipContent, TooltipProvider};

/// Input kinds accepted by the text field, a closed set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Plain text input (default)
    #[default]
    Text,
    /// Password input (masked display)
    Password,
}

impl InputKind {
    /// Parse a kind name, degrading to [`InputKind::Text`] with a warning
    ///
    /// An out-of-range name is a configuration shape violation, not an
    /// error: the field keeps working with the nearest safe default.
    pub fn parse_lossy(name: &str) -> (Self, Option<ConfigWarning>) {
        match name {
            "text" => (InputKind::Text, None),
            "password" => (InputKind::Password, None),
            other => (
                InputKind::Text,
                Some(ConfigWarning::UnknownInputKind {
                    given: other.to_string(),
                    fallback: "text",
                }),
            ),
        }
    }

    /// Should this kind be displayed masked?
    pub fn is_masked(&self) -> bool {
        matches!(self, InputKind::Password)
    }
}

/// Text field configuration
#[derive(Clone, Default)]
pub struct TextFieldConfig {
    /// Identifier, opaque to the engine
    pub name: String,
    /// Placeholder shown when empty (opaque display string)
    pub placeholder: Option<String>,
    /// External value; presence marks the control controlled
    pub value: Option<String>,
    /// Input kind
    pub kind: InputKind,
    /// Whether disabled
    pub disabled: bool,
    /// Whether the control participates in validation styling
    pub required: bool,
    /// Whether the control is currently failing validation
    pub error: bool,
    /// Accepted for record-shape compatibility; meaningless on a text
    /// control and stripped with a warning at build time
    pub exclusive: bool,
    /// Error message text to display (opaque display string)
    pub error_msg: Option<String>,
    /// Decorative status marker override
    pub icon: Option<IconKind>,
    /// Supplementary content provider shown alongside the field
    pub tooltip: Option<SharedTooltipProvider>,
    /// Pre-change notification slot
    pub on_click: Option<ControlCallback<String>>,
    /// Post-change notification slot
    pub on_change: Option<ControlCallback<String>>,
}

impl TextFieldConfig {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn raw_flags(&self) -> ControlFlags {
        ControlFlags::new()
            .disabled(self.disabled)
            .required(self.required)
            .error(self.error)
            .exclusive(self.exclusive)
    }

    /// Copy of this configuration with a different external value
    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }
}

/// A live text field instance
pub struct TextField {
    config: TextFieldConfig,
    flags: ControlFlags,
    store: SharedValueStore<String>,
    dispatcher: Dispatcher<String>,
    warnings: ConfigWarnings,
}

impl TextField {
    fn with_config(config: TextFieldConfig, mut warnings: ConfigWarnings) -> Self {
        let (flags, flag_warnings) = validate_text_flags(config.raw_flags());
        warnings.extend(flag_warnings);
        report_warnings(&config.name, &warnings);

        let store = shared(ValueStore::seeded(config.value.as_ref()));
        let dispatcher = Dispatcher::new()
            .with_slots(config.on_click.clone(), config.on_change.clone());
        Self {
            config,
            flags,
            store,
            dispatcher,
            warnings,
        }
    }

    /// Route an edit interaction into the engine
    ///
    /// The replacement value is supplied by the interaction; a disabled
    /// field blocks silently.
    pub fn edit(&self, event: &InteractionEvent, next: impl Into<String>) -> DispatchOutcome {
        self.dispatcher.replace(event, self.flags, &self.store, next)
    }

    /// Apply a fresh configuration pushed by the owner
    pub fn reconcile(&mut self, config: TextFieldConfig) {
        let (flags, warnings) = validate_text_flags(config.raw_flags());
        report_warnings(&config.name, &warnings);

        self.store.lock().unwrap().reconcile(config.value.as_ref());
        self.dispatcher = Dispatcher::new()
            .with_slots(config.on_click.clone(), config.on_change.clone());
        self.flags = flags;
        self.warnings = warnings;
        self.config = config;
    }

    /// Current text value
    pub fn text(&self) -> String {
        self.store.lock().unwrap().read()
    }

    /// Display text, masked for password kinds
    pub fn display_text(&self) -> String {
        let value = self.text();
        if self.config.kind.is_masked() {
            "\u{2022}".repeat(value.chars().count())
        } else {
            value
        }
    }

    /// Whether the value is currently owner-driven
    pub fn is_controlled(&self) -> bool {
        self.store.lock().unwrap().is_controlled()
    }

    /// Visual variant for the current configuration
    pub fn variant(&self) -> StyleVariant {
        StyleVariant::resolve(self.flags)
    }

    /// The decorative status marker to render, if any
    ///
    /// An explicit icon wins; otherwise the variant implies one: a cross
    /// for error, a check for success, nothing for the rest.
    pub fn status_icon(&self) -> Option<IconKind> {
        if self.config.icon.is_some() {
            return self.config.icon;
        }
        match self.variant() {
            StyleVariant::Error => Some(IconKind::Cancel),
            StyleVariant::Success => Some(IconKind::Success),
            StyleVariant::Standard | StyleVariant::Disabled => None,
        }
    }

    /// Error message to display, if any
    pub fn error_message(&self) -> Option<&str> {
        self.config.error_msg.as_deref()
    }

    /// Supplementary tooltip content, if a provider is attached
    pub fn tooltip(&self) -> Option<TooltipContent> {
        self.config.tooltip.as_ref().map(|provider| provider.content())
    }

    /// The flags merged with the current value
    pub fn snapshot(&self) -> Snapshot<String> {
        Snapshot {
            flags: self.flags,
            value: self.text(),
        }
    }

    /// Warnings produced by the last configuration validation
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &TextFieldConfig {
        &self.config
    }

    /// Shared handle to the value store
    pub fn store(&self) -> &SharedValueStore<String> {
        &self.store
    }
}

/// Builder for creating TextField components with a fluent API
pub struct TextFieldBuilder {
    config: TextFieldConfig,
    warnings: ConfigWarnings,
}

impl TextFieldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: TextFieldConfig::new(name),
            warnings: ConfigWarnings::new(),
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = Some(placeholder.into());
        self
    }

    /// Supply an external value (marks the control controlled)
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.config.value = Some(value.into());
        self
    }

    /// Set the input kind
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.config.kind = kind;
        self
    }

    /// Set the input kind by name, e.g. `"text"` or `"password"`
    ///
    /// Names outside the closed set degrade to `text` with a warning.
    pub fn input_type(mut self, name: &str) -> Self {
        let (kind, warning) = InputKind::parse_lossy(name);
        self.config.kind = kind;
        self.warnings.extend(warning);
        self
    }

    /// Make this a password input (masked display)
    pub fn password(mut self) -> Self {
        self.config.kind = InputKind::Password;
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Mark the field as validated (styled success/error)
    pub fn required(mut self) -> Self {
        self.config.required = true;
        self
    }

    /// Set the validation error flag
    pub fn error(mut self, error: bool) -> Self {
        self.config.error = error;
        self
    }

    /// Set the error message text
    pub fn error_msg(mut self, message: impl Into<String>) -> Self {
        self.config.error_msg = Some(message.into());
        self
    }

    /// Attach an explicit status icon
    pub fn icon(mut self, icon: IconKind) -> Self {
        self.config.icon = Some(icon);
        self
    }

    /// Attach a tooltip provider
    pub fn tooltip(mut self, provider: impl TooltipProvider + 'static) -> Self {
        self.config.tooltip = Some(Arc::new(provider));
        self
    }

    /// Set the pre-change notification slot
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(&InteractionEvent, &Snapshot<String>) + Send + Sync + 'static,
    {
        self.config.on_click = Some(Arc::new(callback));
        self
    }

    /// Set the post-change notification slot
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&InteractionEvent, &Snapshot<String>) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(callback));
        self
    }

    /// Build the live text field instance
    pub fn build(self) -> TextField {
        TextField::with_config(self.config, self.warnings)
    }
}

/// Create a text field builder
pub fn text_field(name: impl Into<String>) -> TextFieldBuilder {
    TextFieldBuilder::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn event() -> InteractionEvent {
        InteractionEvent::synthetic(1)
    }

    #[test]
    fn test_uncontrolled_field_starts_empty() {
        let field = text_field("username").placeholder("Enter username").build();
        assert_eq!(field.text(), "");
        assert!(!field.is_controlled());
        assert_eq!(field.variant(), StyleVariant::Standard);
    }

    #[test]
    fn test_controlled_empty_string_is_controlled() {
        let field = text_field("username").value("").build();
        assert!(field.is_controlled());
    }

    #[test]
    fn test_edit_replaces_and_notifies() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_in_cb = seen.clone();
        let field = text_field("username")
            .on_change(move |_, snapshot| {
                seen_in_cb.lock().unwrap().push(snapshot.value.clone())
            })
            .build();

        field.edit(&event(), "egghead");
        assert_eq!(field.text(), "egghead");
        assert_eq!(seen.lock().unwrap().as_slice(), &["egghead".to_string()]);
    }

    #[test]
    fn test_disabled_field_blocks_edits() {
        let field = text_field("frozen").value("Egghead").disabled(true).build();
        assert_eq!(field.edit(&event(), "changed"), DispatchOutcome::Blocked);
        assert_eq!(field.text(), "Egghead");
        assert_eq!(field.variant(), StyleVariant::Disabled);
    }

    #[test]
    fn test_unknown_input_type_degrades_with_one_warning() {
        let field = text_field("when").input_type("datetime").build();
        assert_eq!(field.config().kind, InputKind::Text);
        assert_eq!(field.warnings().len(), 1);
        assert!(matches!(
            field.warnings()[0],
            ConfigWarning::UnknownInputKind { .. }
        ));
    }

    #[test]
    fn test_exclusive_is_stripped_from_text_controls() {
        let mut config = TextFieldConfig::new("odd");
        config.exclusive = true;
        let field = TextField::with_config(config, ConfigWarnings::new());
        assert_eq!(
            field.warnings(),
            &[ConfigWarning::ExclusiveOnTextControl]
        );
        // The stripped flag cannot block edits
        assert_eq!(field.edit(&event(), "ok"), DispatchOutcome::Committed);
    }

    #[test]
    fn test_status_icon_follows_variant() {
        let field = text_field("pw")
            .required()
            .error(true)
            .error_msg("Password must contain at least 8 characters.")
            .build();
        assert_eq!(field.variant(), StyleVariant::Error);
        assert_eq!(field.status_icon(), Some(IconKind::Cancel));
        assert_eq!(
            field.error_message(),
            Some("Password must contain at least 8 characters.")
        );

        let field = text_field("pw").required().build();
        assert_eq!(field.status_icon(), Some(IconKind::Success));

        let field = text_field("pw").build();
        assert_eq!(field.status_icon(), None);
    }

    #[test]
    fn test_explicit_icon_wins() {
        let field = text_field("hint").icon(IconKind::Question).build();
        assert_eq!(field.status_icon(), Some(IconKind::Question));
    }

    #[test]
    fn test_password_display_is_masked() {
        let field = text_field("pw").password().value("secret").build();
        assert_eq!(field.display_text(), "\u{2022}".repeat(6));
        assert_eq!(field.text(), "secret");
    }

    #[test]
    fn test_reconcile_overrides_local_edit() {
        let mut field = text_field("synced").value("owner").build();
        field.edit(&event(), "local");
        assert_eq!(field.text(), "local");

        let config = field.config().clone().with_value(Some("owner".into()));
        field.reconcile(config);
        assert_eq!(field.text(), "owner");
    }

    #[test]
    fn test_tooltip_is_forwarded_untouched() {
        use crate::tooltip::PasswordGuidance;

        let field = text_field("pw")
            .password()
            .tooltip(PasswordGuidance::for_value("aaaa1111"))
            .build();
        let content = field.tooltip().unwrap();
        assert_eq!(content.title, "Password Strength: Good");

        let plain = text_field("pw").build();
        assert!(plain.tooltip().is_none());
    }
}
