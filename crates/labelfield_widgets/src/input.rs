//! Input handle
//!
//! The capability set a label field needs from its underlying input
//! primitive. The field receives the handle after the input is created and
//! treats every call as fallible.

use labelfield_core::Result;

/// Imperative control over an input primitive
pub trait InputHandle: Send {
    fn focus(&mut self) -> Result<()>;

    fn blur(&mut self) -> Result<()>;

    /// Clear the input's text
    fn clear(&mut self) -> Result<()>;

    fn is_focused(&self) -> Result<bool>;
}
