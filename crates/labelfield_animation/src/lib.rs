//! Labelfield Animation System
//!
//! Timed transitions driven by a frame scheduler.
//!
//! # Features
//!
//! - **Timed Transitions**: fixed-duration interpolation with easing curves
//! - **Retargeting**: a new target restarts from the current value, never queues
//! - **Scheduler**: one place that ticks every live value each frame
//! - **Detachable**: dropping an `AnimatedValue` removes it from the scheduler

pub mod easing;
pub mod scheduler;
pub mod timing;
pub mod value;

pub use easing::Easing;
pub use scheduler::{AnimationScheduler, SchedulerHandle, SharedScheduler, ValueId};
pub use timing::{Timing, Transition, DEFAULT_DURATION_MS};
pub use value::AnimatedValue;
