//! Labelfield Core
//!
//! Foundational primitives shared by the labelfield widgets:
//!
//! - **Events**: focus, blur and text-change events emitted by an input primitive
//! - **State Machines**: flat statecharts for field interaction states
//! - **Values**: externally supplied field values and their string form
//! - **Errors**: the narrow fault taxonomy absorbed at the widget boundary
//!
//! # Example
//!
//! ```rust
//! use labelfield_core::value::{has_content, stringify, FieldValue};
//!
//! let value = FieldValue::from(0);
//! assert_eq!(stringify(Some(&value)), "0");
//! assert!(has_content(Some("0")));
//! assert!(!has_content(None));
//! ```

pub mod color;
pub mod error;
pub mod events;
pub mod fsm;
pub mod value;

pub use color::Color;
pub use error::{CallbackError, FieldError, Result};
pub use events::{Event, EventData, EventType};
pub use fsm::{StateId, StateMachine};
pub use value::{has_content, stringify, FieldValue};
