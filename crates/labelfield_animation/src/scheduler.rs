//! Animation scheduler
//!
//! Owns every live animated value and advances them each frame. Widgets
//! never hold the scheduler itself, only a weak `SchedulerHandle`. Hosts
//! drive it through `SharedScheduler`, which locks for one call at a time,
//! so no guard is ever held while a widget reads its values.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Instant;

use slotmap::{new_key_type, SlotMap};

use crate::timing::{Timing, Transition};

new_key_type! {
    pub struct ValueId;
}


struct ValueSlot {
    current: f32,
    transition: Option<Transition>,
}

/// The animation scheduler that ticks all active values
pub struct AnimationScheduler {
    values: SlotMap<ValueId, ValueSlot>,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            values: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    /// Create a scheduler ready to be shared with handles
    pub fn new_shared() -> SharedScheduler {
        SharedScheduler::new()
    }

    pub(crate) fn register(&mut self, initial: f32) -> ValueId {
        self.values.insert(ValueSlot {
            current: initial,
            transition: None,
        })
    }

    pub(crate) fn remove(&mut self, id: ValueId) {
        if let Some(slot) = self.values.remove(id) {
            if slot.transition.is_some() {
                tracing::trace!("detached value {:?} mid-transition", id);
            }
        }
    }

    /// Start a transition from the value's current position.
    ///
    /// Replaces any in-flight transition. Returns false if the value is unknown.
    pub(crate) fn animate(&mut self, id: ValueId, target: f32, timing: Timing) -> bool {
        let Some(slot) = self.values.get_mut(id) else {
            return false;
        };

        let transition = Transition::new(slot.current, target, timing);
        if transition.is_finished() {
            slot.current = target;
            slot.transition = None;
        } else {
            tracing::trace!(
                "animate {:?}: {:.2} -> {:.2} over {}ms",
                id,
                slot.current,
                target,
                timing.duration_ms
            );
            slot.transition = Some(transition);
        }
        true
    }

    /// Current value of a registered value
    pub fn value(&self, id: ValueId) -> Option<f32> {
        self.values.get(id).map(|slot| slot.current)
    }

    /// Whether a value has a transition in flight
    pub fn is_animating(&self, id: ValueId) -> bool {
        self.values
            .get(id)
            .is_some_and(|slot| slot.transition.is_some())
    }

    /// Tick all animations by the wall-clock time since the last frame
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.advance(dt_ms);
    }

    /// Advance all animations by an explicit delta (in milliseconds)
    pub fn advance(&mut self, dt_ms: f32) {
        for (_, slot) in self.values.iter_mut() {
            let Some(transition) = slot.transition.as_mut() else {
                continue;
            };
            if transition.tick(dt_ms) {
                slot.current = transition.target();
                slot.transition = None;
            } else {
                slot.current = transition.value();
            }
        }
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.values.iter().any(|(_, s)| s.transition.is_some())
    }

    /// Number of registered values
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Scheduler shared between the frame loop and widget handles
#[derive(Clone, Default)]
pub struct SharedScheduler {
    inner: Arc<Mutex<AnimationScheduler>>,
}

impl SharedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A weak handle for widgets
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle::new(self)
    }

    /// Tick all animations by the wall-clock time since the last frame
    pub fn tick(&self) {
        self.with(AnimationScheduler::tick)
    }

    /// Advance all animations by an explicit delta (in milliseconds)
    pub fn advance(&self, dt_ms: f32) {
        self.with(|s| s.advance(dt_ms))
    }

    pub fn has_active_animations(&self) -> bool {
        self.with(|s| s.has_active_animations())
    }

    pub fn value_count(&self) -> usize {
        self.with(|s| s.value_count())
    }

    fn with<R>(&self, f: impl FnOnce(&mut AnimationScheduler) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl std::fmt::Debug for SharedScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedScheduler")
            .field("values", &self.value_count())
            .finish()
    }
}

/// Weak handle to a shared scheduler
#[derive(Clone, Default)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<AnimationScheduler>>,
}

impl SchedulerHandle {
    pub fn new(scheduler: &SharedScheduler) -> Self {
        Self {
            inner: Arc::downgrade(&scheduler.inner),
        }
    }

    /// A handle with no scheduler behind it; values snap to their targets
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Run `f` against the scheduler if it is still alive
    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut AnimationScheduler) -> R) -> Option<R> {
        let scheduler = self.inner.upgrade()?;
        let mut guard = scheduler.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut guard))
    }
}

impl std::fmt::Debug for SchedulerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}
