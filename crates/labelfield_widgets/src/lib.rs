//! Labelfield Widget Library
//!
//! A text field whose placeholder floats up into a header once the field has
//! content.
//!
//! - [`LabelField`] owns the text and focus state and wires the input
//! - [`FloatingLabel`] animates the label's position and opacity
//! - [`FieldHolder`] animates the room made above the input
//!
//! Rendering produces plain view data ([`view`]); turning that into pixels is
//! the host's job, as is ticking the [`AnimationScheduler`].
//!
//! [`AnimationScheduler`]: labelfield_animation::AnimationScheduler

pub mod config;
pub mod field_holder;
pub mod floating_label;
pub mod input;
pub mod label_field;
pub mod view;
pub mod widget;

pub use config::{ContainerStyle, HolderMotion, LabelFieldConfig, LabelMotion, StyleOverride};
pub use field_holder::FieldHolder;
pub use floating_label::FloatingLabel;
pub use input::InputHandle;
pub use label_field::{
    label_field, reconcile, FieldPhase, FieldState, LabelField, LabelFieldBuilder,
    LabelFieldProps,
};
pub use view::LabelFieldView;
pub use widget::Widget;
