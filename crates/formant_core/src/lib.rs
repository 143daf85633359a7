//! Formant core engine
//!
//! This crate provides the state engine behind the Formant form controls:
//!
//! - **Value stores**: per-instance value ownership with controlled /
//!   uncontrolled reconciliation
//! - **Toggle eligibility**: the precondition gating every requested flip
//! - **Interaction dispatch**: eligibility check, ordered notifications,
//!   value commit
//! - **Style variants**: deterministic visual-state resolution from flags
//! - **Events**: the opaque interaction token handed through to callbacks
//!
//! The engine is headless and synchronous. It is invoked, not observed: the
//! hosting layer calls [`ValueStore::reconcile`] whenever new configuration
//! arrives and routes user interactions into a [`Dispatcher`].
//!
//! # Example
//!
//! ```rust
//! use formant_core::{
//!     ControlFlags, Dispatcher, InteractionEvent, StyleVariant, ValueStore,
//! };
//!
//! let flags = ControlFlags::new().required(true);
//! assert_eq!(StyleVariant::resolve(flags), StyleVariant::Success);
//!
//! // Uncontrolled store, seeded with the default
//! let store = formant_core::shared(ValueStore::seeded(None));
//!
//! let dispatcher = Dispatcher::<bool>::new();
//! let event = InteractionEvent::pointer_up(1, 10.0, 10.0);
//! dispatcher.toggle(&event, flags, &store);
//! assert!(store.lock().unwrap().read());
//! ```

pub mod config;
pub mod dispatch;
pub mod eligibility;
pub mod events;
pub mod registry;
pub mod store;
pub mod variant;

pub use config::{
    report_warnings, validate_text_flags, ConfigWarning, ConfigWarnings, ControlFlags,
};
pub use dispatch::{ControlCallback, DispatchOutcome, Dispatcher, Snapshot};
pub use eligibility::{can_edit, can_toggle};
pub use events::{
    event_types, EventData, EventType, InteractionEvent, KeyCode, Modifiers,
};
pub use registry::{ControlId, ControlRuntime};
pub use store::{shared, SharedValueStore, ValueStore};
pub use variant::StyleVariant;
