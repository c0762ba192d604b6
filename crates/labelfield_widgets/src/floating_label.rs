//! Floating label
//!
//! Draws the label text over the input. While visible it rests at the upper
//! offset, fully opaque; otherwise it sits at the lower offset, transparent.
//! Every visibility update retargets both values; re-sending the current
//! visibility changes nothing.

use labelfield_animation::{AnimatedValue, SchedulerHandle};

use crate::config::LabelMotion;
use crate::view::Positioned;

/// Z-index that keeps the label above the input
const LABEL_Z_INDEX: i32 = 2;

pub struct FloatingLabel {
    offset: AnimatedValue,
    opacity: AnimatedValue,
    motion: LabelMotion,
    visible: bool,
}

impl FloatingLabel {
    /// Create a label already settled for `visible`
    pub fn new(handle: SchedulerHandle, visible: bool, motion: LabelMotion) -> Self {
        let (offset, opacity) = Self::targets(&motion, visible);
        Self {
            offset: AnimatedValue::new(handle.clone(), offset),
            opacity: AnimatedValue::new(handle, opacity),
            motion,
            visible,
        }
    }

    fn targets(motion: &LabelMotion, visible: bool) -> (f32, f32) {
        if visible {
            (motion.upper_offset, 1.0)
        } else {
            (motion.lower_offset, 0.0)
        }
    }

    /// Move toward the rest position for `visible`
    pub fn set_visible(&mut self, visible: bool) {
        if visible != self.visible {
            tracing::trace!("floating label visible: {}", visible);
        }
        self.visible = visible;

        let (offset, opacity) = Self::targets(&self.motion, visible);
        self.offset.animate_to(offset, self.motion.timing);
        self.opacity.animate_to(opacity, self.motion.timing);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    /// Current opacity, kept within 0..=1 even when the easing overshoots
    pub fn opacity(&self) -> f32 {
        self.opacity.get().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating() || self.opacity.is_animating()
    }

    /// Position `children` at the current offset and opacity
    pub fn render<C>(&self, children: C) -> Positioned<C> {
        Positioned {
            top: self.offset(),
            left: 0.0,
            opacity: self.opacity(),
            z_index: LABEL_Z_INDEX,
            absolute: true,
            child: children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelfield_animation::{AnimationScheduler, Easing, Timing};

    #[test]
    fn test_initial_rest_positions() {
        let scheduler = AnimationScheduler::new_shared();
        let motion = LabelMotion::default();

        let hidden = FloatingLabel::new(SchedulerHandle::new(&scheduler), false, motion);
        assert_eq!(hidden.offset(), 12.0);
        assert_eq!(hidden.opacity(), 0.0);

        let shown = FloatingLabel::new(SchedulerHandle::new(&scheduler), true, motion);
        assert_eq!(shown.offset(), 1.0);
        assert_eq!(shown.opacity(), 1.0);
        assert!(!shown.is_animating());
    }

    #[test]
    fn test_show_then_settle() {
        let scheduler = AnimationScheduler::new_shared();
        let mut label =
            FloatingLabel::new(SchedulerHandle::new(&scheduler), false, LabelMotion::default());

        label.set_visible(true);
        assert!(label.is_animating());

        scheduler.advance(115.0);
        assert!(label.offset() < 12.0 && label.offset() > 1.0);
        assert!(label.opacity() > 0.0 && label.opacity() < 1.0);

        scheduler.advance(115.0);
        assert_eq!(label.offset(), 1.0);
        assert_eq!(label.opacity(), 1.0);
    }

    #[test]
    fn test_overshooting_easing_keeps_opacity_in_range() {
        let scheduler = AnimationScheduler::new_shared();
        let motion = LabelMotion {
            timing: Timing::new(230).easing(Easing::CubicBezier(0.4, 3.0, 0.6, 1.0)),
            ..LabelMotion::default()
        };
        let mut label = FloatingLabel::new(scheduler.handle(), false, motion);
        label.set_visible(true);

        let mut overshot = false;
        for _ in 0..20 {
            scheduler.advance(1000.0 / 60.0);
            let positioned = label.render(());
            assert!((0.0..=1.0).contains(&positioned.opacity));
            overshot |= positioned.top < motion.upper_offset;
        }
        // The offset itself is allowed to overshoot
        assert!(overshot);
        assert_eq!(label.opacity(), 1.0);
    }

    #[test]
    fn test_render_overlays() {
        let scheduler = AnimationScheduler::new_shared();
        let label =
            FloatingLabel::new(SchedulerHandle::new(&scheduler), true, LabelMotion::default());

        let positioned = label.render("Name");
        assert!(positioned.absolute);
        assert_eq!(positioned.z_index, 2);
        assert_eq!(positioned.top, 1.0);
        assert_eq!(positioned.child, "Name");
    }
}
