//! Control configuration flags and validation
//!
//! `ControlFlags` is the declarative flag set every control resolves its
//! behavior from. It is supplied anew on every update cycle and never
//! persisted by the engine; the hosting layer owns it.
//!
//! Validation is advisory: a malformed configuration is reported once as a
//! developer-facing warning and the control degrades to the nearest safe
//! default. Nothing here aborts.

use smallvec::SmallVec;
use thiserror::Error;

/// Declarative behavior flags for a single control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlFlags {
    /// Control ignores all user interaction
    pub disabled: bool,
    /// Control participates in required/success-error validation styling
    pub required: bool,
    /// Control is currently failing validation
    pub error: bool,
    /// Radio-like: once set, direct interaction cannot unset it
    pub exclusive: bool,
}

impl ControlFlags {
    /// Flags for a plain enabled control
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }
}

/// Advisory configuration warnings
///
/// These are never fatal and never propagate past the widget boundary; the
/// widget keeps working with the nearest safe default.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A kind string outside the closed set was supplied
    #[error("unknown input kind `{given}`, falling back to `{fallback}`")]
    UnknownInputKind {
        given: String,
        fallback: &'static str,
    },
    /// `exclusive` only makes sense on toggle-like controls
    #[error("`exclusive` has no effect on a text control and was ignored")]
    ExclusiveOnTextControl,
}

/// Warning list returned by configuration validation
pub type ConfigWarnings = SmallVec<[ConfigWarning; 2]>;

/// Validate flags for a text control, stripping what does not apply
///
/// Returns the corrected flags and the warnings produced. Toggle controls
/// accept every flag combination and have no corresponding check.
pub fn validate_text_flags(mut flags: ControlFlags) -> (ControlFlags, ConfigWarnings) {
    let mut warnings = ConfigWarnings::new();
    if flags.exclusive {
        flags.exclusive = false;
        warnings.push(ConfigWarning::ExclusiveOnTextControl);
    }
    (flags, warnings)
}

/// Report configuration warnings for a named control
///
/// Called once at construction time; the engine does not re-report on
/// subsequent reads.
pub fn report_warnings(name: &str, warnings: &[ConfigWarning]) {
    for warning in warnings {
        tracing::warn!("{}: {}", name, warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_builder() {
        let flags = ControlFlags::new().disabled(true).required(true);
        assert!(flags.disabled);
        assert!(flags.required);
        assert!(!flags.error);
        assert!(!flags.exclusive);
    }

    #[test]
    fn test_text_flags_strip_exclusive() {
        let flags = ControlFlags::new().exclusive(true).required(true);
        let (corrected, warnings) = validate_text_flags(flags);
        assert!(!corrected.exclusive);
        assert!(corrected.required);
        assert_eq!(warnings.as_slice(), &[ConfigWarning::ExclusiveOnTextControl]);
    }

    #[test]
    fn test_text_flags_clean_config_no_warnings() {
        let (corrected, warnings) = validate_text_flags(ControlFlags::new().required(true));
        assert_eq!(corrected, ControlFlags::new().required(true));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::UnknownInputKind {
            given: "datetime".into(),
            fallback: "text",
        };
        assert_eq!(
            warning.to_string(),
            "unknown input kind `datetime`, falling back to `text`"
        );
    }
}
