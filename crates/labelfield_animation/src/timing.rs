//! Timed transitions
//!
//! A transition interpolates from a start value to a target over a fixed
//! duration. Time is advanced explicitly in milliseconds, so the same code
//! runs under a wall-clock frame loop and under deterministic tests.

use crate::easing::Easing;

/// Default transition duration in milliseconds
pub const DEFAULT_DURATION_MS: u32 = 230;

/// How a value travels to its target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

impl Timing {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..Default::default()
        }
    }

    /// Set the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// An in-flight transition between two values
#[derive(Clone, Debug)]
pub struct Transition {
    from: f32,
    to: f32,
    timing: Timing,
    elapsed_ms: f32,
}

impl Transition {
    pub fn new(from: f32, to: f32, timing: Timing) -> Self {
        Self {
            from,
            to,
            timing,
            elapsed_ms: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn progress(&self) -> f32 {
        if self.timing.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.timing.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current interpolated value; exactly the target once finished
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.timing.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance by delta time (in milliseconds), returning true when finished
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.elapsed_ms += dt_ms.max(0.0);
        self.is_finished()
    }
}
