//! Animated values
//!
//! An `AnimatedValue` is a scalar that lives in a scheduler and only moves
//! through timed transitions. It is seeded once at construction; afterwards
//! the only way to change it is `animate_to`.

use crate::scheduler::{SchedulerHandle, ValueId};
use crate::timing::Timing;

/// A scalar animated by the scheduler behind `handle`
#[derive(Debug)]
pub struct AnimatedValue {
    handle: SchedulerHandle,
    id: Option<ValueId>,
    target: f32,
}

impl AnimatedValue {
    /// Register a new value with the scheduler, settled at `initial`
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        let id = handle.with(|s| s.register(initial));
        if id.is_none() {
            tracing::debug!("animated value created without a live scheduler");
        }
        Self {
            handle,
            id,
            target: initial,
        }
    }

    /// Current value.
    ///
    /// Without a live scheduler there is nothing to interpolate, so the value
    /// reads as already settled at its target.
    pub fn get(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.with(|s| s.value(id)).flatten())
            .unwrap_or(self.target)
    }

    /// The most recently requested target
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.id
            .and_then(|id| self.handle.with(|s| s.is_animating(id)))
            .unwrap_or(false)
    }

    /// Start a timed transition toward `target`. Fire-and-forget.
    ///
    /// A transition already heading to `target` is left alone; any other
    /// in-flight transition is replaced, starting from the current value.
    pub fn animate_to(&mut self, target: f32, timing: Timing) {
        if target == self.target {
            return;
        }
        self.target = target;

        let Some(id) = self.id else {
            return;
        };
        let started = self
            .handle
            .with(|s| s.animate(id, target, timing))
            .unwrap_or(false);
        if !started {
            tracing::trace!("scheduler gone, {:?} settles at {}", id, target);
        }
    }

}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.with(|s| s.remove(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::scheduler::AnimationScheduler;

    #[test]
    fn test_value_follows_scheduler() {
        let scheduler = AnimationScheduler::new_shared();
        let mut value = AnimatedValue::new(SchedulerHandle::new(&scheduler), 0.0);
        assert_eq!(value.get(), 0.0);

        value.animate_to(1.0, Timing::new(100).easing(Easing::Linear));
        assert!(value.is_animating());

        scheduler.advance(40.0);
        assert!((value.get() - 0.4).abs() < 0.001);

        scheduler.advance(60.0);
        assert_eq!(value.get(), 1.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_same_target_is_idempotent() {
        let scheduler = AnimationScheduler::new_shared();
        let mut value = AnimatedValue::new(SchedulerHandle::new(&scheduler), 0.0);
        let linear = Timing::new(100).easing(Easing::Linear);

        value.animate_to(1.0, linear);
        scheduler.advance(50.0);

        // Re-requesting the same target must not restart the clock
        value.animate_to(1.0, linear);
        scheduler.advance(50.0);
        assert_eq!(value.get(), 1.0);

        // Settled at target: nothing starts
        value.animate_to(1.0, linear);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_drop_detaches() {
        let scheduler = AnimationScheduler::new_shared();
        let mut value = AnimatedValue::new(SchedulerHandle::new(&scheduler), 0.0);
        value.animate_to(5.0, Timing::default());
        assert_eq!(scheduler.value_count(), 1);

        drop(value);
        assert_eq!(scheduler.value_count(), 0);
        assert!(!scheduler.has_active_animations());
        scheduler.advance(500.0);
    }

    #[test]
    fn test_without_scheduler_snaps_to_target() {
        let mut value = AnimatedValue::new(SchedulerHandle::detached(), 12.0);
        assert_eq!(value.get(), 12.0);
        value.animate_to(1.0, Timing::default());
        assert_eq!(value.get(), 1.0);
        assert!(!value.is_animating());
    }
}
