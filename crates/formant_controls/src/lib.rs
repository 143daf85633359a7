//! Formant control library
//!
//! Headless form-control components: checkbox, switch, radio group, and
//! validated text field. Each component owns its value state through the
//! `formant_core` engine (controlled/uncontrolled reconciliation, toggle
//! eligibility, ordered notifications) and leaves markup, styling, and
//! accessibility to the hosting layer, which consumes the resolved value
//! and [`StyleVariant`](formant_core::StyleVariant).
//!
//! # Example
//!
//! ```rust
//! use formant_controls::prelude::*;
//!
//! let terms = checkbox("accept-terms")
//!     .label("I accept the terms")
//!     .required()
//!     .on_change(|_, snapshot| println!("accepted: {}", snapshot.value))
//!     .build();
//!
//! let event = InteractionEvent::pointer_up(1, 0.0, 0.0);
//! terms.click(&event);
//! assert!(terms.is_checked());
//! ```

pub mod components;
pub mod icons;
pub mod tooltip;

pub use components::{
    checkbox, radio_group, switch, text_field, Checkbox, CheckboxBuilder, CheckboxConfig,
    InputKind, RadioGroup, RadioGroupBuilder, RadioGroupConfig, RadioOption, SelectionCallback,
    Switch, SwitchBuilder, SwitchConfig, TextField, TextFieldBuilder, TextFieldConfig,
};
pub use icons::{to_svg, IconKind};
pub use tooltip::{
    PasswordGuidance, PasswordStrength, SharedTooltipProvider, TooltipContent, TooltipProvider,
};

/// Commonly used types for hosting layers
pub mod prelude {
    pub use crate::components::{
        checkbox, radio_group, switch, text_field, Checkbox, CheckboxConfig, InputKind,
        RadioGroup, RadioGroupConfig, Switch, SwitchConfig, TextField, TextFieldConfig,
    };
    pub use crate::icons::{to_svg, IconKind};
    pub use crate::tooltip::{
        PasswordGuidance, PasswordStrength, TooltipContent, TooltipProvider,
    };
    pub use formant_core::{
        ControlFlags, DispatchOutcome, InteractionEvent, Snapshot, StyleVariant,
    };
}
