//! Field holder
//!
//! Wraps the input and animates a top inset that makes room for the floated
//! label whenever the field has content.

use labelfield_animation::{AnimatedValue, SchedulerHandle};

use crate::config::HolderMotion;
use crate::view::Inset;

pub struct FieldHolder {
    offset: AnimatedValue,
    motion: HolderMotion,
    with_value: bool,
}

impl FieldHolder {
    pub fn new(handle: SchedulerHandle, with_value: bool, motion: HolderMotion) -> Self {
        let initial = if with_value { motion.value_offset } else { 0.0 };
        Self {
            offset: AnimatedValue::new(handle, initial),
            motion,
            with_value,
        }
    }

    /// Grow or shrink the inset toward the rest position for `with_value`
    pub fn set_with_value(&mut self, with_value: bool) {
        self.with_value = with_value;
        let target = if with_value {
            self.motion.value_offset
        } else {
            0.0
        };
        self.offset.animate_to(target, self.motion.timing);
    }

    pub fn with_value(&self) -> bool {
        self.with_value
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    pub fn render<C>(&self, child: C) -> Inset<C> {
        Inset {
            padding_top: self.offset(),
            child,
        }
    }
}
