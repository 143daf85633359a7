//! Style-variant resolution
//!
//! Maps a control's declarative flags to the visual variant the presentation
//! layer should render. The mapping is a pure function of the flags: nothing
//! is cached, nothing reads the value store, and calling it on every read is
//! expected and cheap.

use crate::config::ControlFlags;

/// Visual validation state derived from [`ControlFlags`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleVariant {
    /// Plain control, no validation styling
    #[default]
    Standard,
    /// Required control currently failing validation
    Error,
    /// Required control currently passing validation
    Success,
    /// Control ignores interaction and renders muted
    Disabled,
}

impl StyleVariant {
    /// Resolve the variant for the given flags
    ///
    /// `disabled` wins over everything else; a required control is styled as
    /// error or success depending on its error flag; anything else is
    /// standard.
    pub fn resolve(flags: ControlFlags) -> Self {
        if flags.disabled {
            StyleVariant::Disabled
        } else if flags.required {
            if flags.error {
                StyleVariant::Error
            } else {
                StyleVariant::Success
            }
        } else {
            StyleVariant::Standard
        }
    }

    /// Returns true if this variant reflects a validation outcome
    pub fn is_validated(&self) -> bool {
        matches!(self, StyleVariant::Error | StyleVariant::Success)
    }
}
