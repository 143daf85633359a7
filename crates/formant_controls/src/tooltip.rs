//! Tooltip collaborators
//!
//! Supplementary content displayed alongside a text input, supplied by a
//! provider the control only holds a handle to. Entirely decoupled from
//! variant resolution and value state: a tooltip never influences what the
//! engine decides, it is display-only.

use std::sync::Arc;

/// Content a tooltip provider hands to the presentation layer
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    /// Heading, e.g. "Password Strength: Good"
    pub title: String,
    /// Meter fill fraction in `0.0..=1.0`
    pub meter: f32,
    /// Guidance body text
    pub body: String,
}

/// Supplies tooltip content for a control
pub trait TooltipProvider: Send + Sync {
    fn content(&self) -> TooltipContent;
}

/// Shared provider handle as stored in control configuration
pub type SharedTooltipProvider = Arc<dyn TooltipProvider>;

/// Password strength classes, weakest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Classify a password value
    ///
    /// Length is the baseline; mixing cases, digits, and symbols moves the
    /// class up. Deliberately coarse: guidance, not enforcement.
    pub fn score(value: &str) -> Self {
        if value.chars().count() < 8 {
            return PasswordStrength::Weak;
        }
        let classes = [
            value.chars().any(|c| c.is_ascii_lowercase()),
            value.chars().any(|c| c.is_ascii_uppercase()),
            value.chars().any(|c| c.is_ascii_digit()),
            value.chars().any(|c| !c.is_ascii_alphanumeric()),
        ]
        .iter()
        .filter(|present| **present)
        .count();

        match classes {
            0 | 1 => PasswordStrength::Fair,
            2 | 3 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Meter fill fraction for this class
    pub fn meter(&self) -> f32 {
        match self {
            PasswordStrength::Weak => 0.25,
            PasswordStrength::Fair => 0.5,
            PasswordStrength::Good => 0.75,
            PasswordStrength::Strong => 1.0,
        }
    }
}

/// Password-strength guidance tooltip
pub struct PasswordGuidance {
    strength: PasswordStrength,
}

impl PasswordGuidance {
    pub fn new(strength: PasswordStrength) -> Self {
        Self { strength }
    }

    /// Build guidance for the given password value
    pub fn for_value(value: &str) -> Self {
        Self::new(PasswordStrength::score(value))
    }
}

impl TooltipProvider for PasswordGuidance {
    fn content(&self) -> TooltipContent {
        TooltipContent {
            title: format!("Password Strength: {}", self.strength.label()),
            meter: self.strength.meter(),
            body: "Use at least 8 characters. Don't use a password from another site, \
                   or something too obvious like your pet's name."
                .to_string(),
        }
    }
}
