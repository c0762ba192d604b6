//! Field error types
//!
//! None of these ever reach the end user: the widget logs and absorbs them at
//! the boundary between internal state and external notification.

use thiserror::Error;

/// Error returned by an owner-supplied callback
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Field-related errors
#[derive(Error, Debug)]
pub enum FieldError {
    /// No input handle is attached yet (e.g. before first render)
    #[error("Input handle is not attached")]
    InputUnavailable,

    /// The input primitive rejected an imperative call
    #[error("Input operation failed: {0}")]
    Input(String),

    /// An owner callback returned an error
    #[error("Callback `{name}` failed: {message}")]
    Callback { name: &'static str, message: String },

    /// An owner callback panicked
    #[error("Callback `{name}` panicked: {message}")]
    CallbackPanicked { name: &'static str, message: String },

    /// Invalid field configuration
    #[error("Invalid field configuration: {0}")]
    Config(String),
}

/// Result type for field operations
pub type Result<T> = std::result::Result<T, FieldError>;
