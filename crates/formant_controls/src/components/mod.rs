//! Headless form-control components built on the formant_core engine
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `checkbox("name")`)
//! - Config struct with the hosting contract's fields
//! - A live instance owning its value store and dispatcher

pub mod checkbox;
pub mod input;
pub mod radio;
pub mod switch;

pub use checkbox::{checkbox, Checkbox, CheckboxBuilder, CheckboxConfig};
pub use input::{text_field, InputKind, TextField, TextFieldBuilder, TextFieldConfig};
pub use radio::{
    radio_group, RadioGroup, RadioGroupBuilder, RadioGroupConfig, RadioOption, SelectionCallback,
};
pub use switch::{switch, Switch, SwitchBuilder, SwitchConfig};
