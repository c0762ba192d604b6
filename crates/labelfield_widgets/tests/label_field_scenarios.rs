//! End-to-end label field behavior
//!
//! Drives a field through the situations a host actually produces: mounting,
//! typing, clearing, misbehaving owner callbacks and controlled re-renders,
//! with a real scheduler ticking the animations.

use std::sync::{Arc, Mutex};

use labelfield_animation::{AnimationScheduler, SchedulerHandle, SharedScheduler};
use labelfield_core::{FieldError, FieldValue};
use labelfield_widgets::{label_field, FieldPhase, InputHandle, LabelField, Widget};

const FRAME_MS: f32 = 1000.0 / 60.0;

fn settle(scheduler: &SharedScheduler) {
    for _ in 0..30 {
        scheduler.advance(FRAME_MS);
    }
    assert!(!scheduler.has_active_animations());
}

fn frame(scheduler: &SharedScheduler) {
    scheduler.advance(FRAME_MS);
}

/// Input whose text the test can observe, like a platform text box
#[derive(Clone, Default)]
struct TextBox {
    text: Arc<Mutex<String>>,
    focused: Arc<Mutex<bool>>,
}

impl InputHandle for TextBox {
    fn focus(&mut self) -> labelfield_core::Result<()> {
        *self.focused.lock().unwrap() = true;
        Ok(())
    }

    fn blur(&mut self) -> labelfield_core::Result<()> {
        *self.focused.lock().unwrap() = false;
        Ok(())
    }

    fn clear(&mut self) -> labelfield_core::Result<()> {
        self.text.lock().unwrap().clear();
        Ok(())
    }

    fn is_focused(&self) -> labelfield_core::Result<bool> {
        Ok(*self.focused.lock().unwrap())
    }
}

fn mount(scheduler: &SharedScheduler, value: &str) -> LabelField {
    label_field("Name")
        .value(value)
        .build(SchedulerHandle::new(scheduler))
}

#[test]
fn test_mount_empty_shows_inline_placeholder() {
    let scheduler = AnimationScheduler::new_shared();
    let field = mount(&scheduler, "");
    settle(&scheduler);

    let view = field.render();
    assert_eq!(view.input().placeholder.as_deref(), Some("Name"));
    assert_eq!(view.input().value, "");
    assert_eq!(view.label().opacity, 0.0);
    assert_eq!(view.label().top, 12.0);
    assert_eq!(view.holder_offset(), 0.0);
    assert_eq!(field.phase(), FieldPhase::EmptyBlurred);
}

#[test]
fn test_typing_first_character_floats_label() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = mount(&scheduler, "");

    field.handle_change_text("A");
    assert!(field.has_content());
    assert!(field.is_animating());

    frame(&scheduler);
    let view = field.render();
    assert!(view.label().top < 12.0);
    assert!(view.label().opacity > 0.0);
    assert!(view.holder_offset() > 0.0);

    settle(&scheduler);
    let view = field.render();
    assert_eq!(view.label().top, 1.0);
    assert_eq!(view.label().opacity, 1.0);
    assert_eq!(view.holder_offset(), 10.0);
    assert_eq!(view.label().child.text.as_deref(), Some("Name"));
}

#[test]
fn test_clear_then_empty_text_floats_label_down() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = mount(&scheduler, "Ada");
    let input = TextBox::default();
    *input.text.lock().unwrap() = "Ada".into();
    field.attach_input(input.clone());
    settle(&scheduler);
    assert_eq!(field.render().label().opacity, 1.0);

    field.clear();
    assert_eq!(*input.text.lock().unwrap(), "");

    // The input reports its now-empty text
    let text = input.text.lock().unwrap().clone();
    field.handle_change_text(text);
    settle(&scheduler);

    let view = field.render();
    assert_eq!(view.label().opacity, 0.0);
    assert_eq!(view.label().top, 12.0);
    assert_eq!(view.holder_offset(), 0.0);
    assert_eq!(field.phase(), FieldPhase::EmptyBlurred);
}

#[test]
fn test_throwing_on_focus_still_focuses() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = label_field("Name")
        .on_focus(|_| Err(FieldError::Input("owner failure".into()).into()))
        .on_blur(|_| panic!("blur handler bug"))
        .build(SchedulerHandle::new(&scheduler));

    field.handle_focus();
    assert!(field.state().focused);
    assert!(field.phase().is_focused());

    field.handle_blur();
    assert!(!field.state().focused);
}

#[test]
fn test_focus_callbacks_see_committed_state() {
    let scheduler = AnimationScheduler::new_shared();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_focus = seen.clone();
    let seen_blur = seen.clone();

    let mut field = label_field("Name")
        .on_focus(move |event| {
            seen_focus.lock().unwrap().push(event.event_type);
            Ok(())
        })
        .on_blur(move |event| {
            seen_blur.lock().unwrap().push(event.event_type);
            Ok(())
        })
        .build(SchedulerHandle::new(&scheduler));

    for _ in 0..3 {
        field.handle_focus();
        assert!(field.state().focused);
        field.handle_blur();
        assert!(!field.state().focused);
    }
    field.handle_focus();
    assert!(field.state().focused);

    assert_eq!(seen.lock().unwrap().len(), 7);
}

#[test]
fn test_focus_alone_does_not_move_label() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = mount(&scheduler, "");

    field.handle_focus();
    assert!(!field.is_animating());
    settle(&scheduler);
    assert_eq!(field.render().label().opacity, 0.0);
    assert_eq!(field.phase(), FieldPhase::EmptyFocused);
}

#[test]
fn test_controlled_rerender_every_keystroke() {
    let scheduler = AnimationScheduler::new_shared();
    let owner_value = Arc::new(Mutex::new(String::new()));
    let owner_value_cb = owner_value.clone();

    let mut field = label_field("Name")
        .value("")
        .on_change_text_value(move |text| {
            *owner_value_cb.lock().unwrap() = text.to_owned();
            Ok(())
        })
        .build(SchedulerHandle::new(&scheduler));

    for typed in ["A", "Ad", "Ada"] {
        field.handle_change_text(typed);
        let value = owner_value.lock().unwrap().clone();
        let history_len = field.history().len();

        field.on_external_value_changed(Some(FieldValue::from(value.clone())));

        assert_eq!(field.text(), Some(value.as_str()));
        assert_eq!(field.history().len(), history_len);
        frame(&scheduler);
    }

    settle(&scheduler);
    assert_eq!(field.render().input().value, "Ada");
    assert_eq!(field.render().label().opacity, 1.0);
}

#[test]
fn test_reconciliation_is_idempotent() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = mount(&scheduler, "");

    field.on_external_value_changed(Some("Grace".into()));
    let history = field.history().to_vec();
    let state = field.state().clone();

    field.on_external_value_changed(Some("Grace".into()));
    assert_eq!(field.history(), history.as_slice());
    assert_eq!(field.state(), &state);
}

#[test]
fn test_uncontrolled_edits_survive_absent_value() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = label_field("Name")
        .default_value("seed")
        .build(SchedulerHandle::new(&scheduler));

    field.handle_change_text("edited");
    field.on_external_value_changed(None);
    assert_eq!(field.text(), Some("edited"));
}

#[test]
fn test_external_push_empties_focused_field() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = mount(&scheduler, "Ada");
    field.handle_focus();
    assert_eq!(field.phase(), FieldPhase::FilledFocused);

    field.on_external_value_changed(Some("".into()));
    assert_eq!(field.phase(), FieldPhase::EmptyFocused);
    assert!(!field.phase().is_filled());

    settle(&scheduler);
    assert_eq!(field.render().label().opacity, 0.0);
}

#[test]
fn test_numeric_value_matches_typed_text() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = label_field("Age")
        .value(0)
        .build(SchedulerHandle::new(&scheduler));
    assert_eq!(field.text(), Some("0"));
    assert!(field.has_content());

    let before = field.history().len();
    field.on_external_value_changed(Some(FieldValue::from("0")));
    field.on_external_value_changed(Some(FieldValue::from(0)));
    assert_eq!(field.history().len(), before);
}

#[test]
fn test_type_then_delete_before_settle() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = mount(&scheduler, "");

    field.handle_change_text("A");
    frame(&scheduler);
    frame(&scheduler);
    field.handle_change_text("");
    settle(&scheduler);

    let view = field.render();
    assert_eq!(view.label().top, 12.0);
    assert_eq!(view.label().opacity, 0.0);
    assert_eq!(view.holder_offset(), 0.0);
}

#[test]
fn test_unmount_mid_animation() {
    let scheduler = AnimationScheduler::new_shared();
    let mut field = mount(&scheduler, "");
    field.handle_change_text("A");
    frame(&scheduler);

    field.unmount();
    assert_eq!(scheduler.value_count(), 0);
    settle(&scheduler);
}

#[test]
fn test_render_between_frames_on_a_worker_thread() {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let scheduler = AnimationScheduler::new_shared();
        let mut field = mount(&scheduler, "");
        field.handle_change_text("A");

        let mut tops = Vec::new();
        for _ in 0..30 {
            scheduler.advance(FRAME_MS);
            tops.push(field.render().label().top);
        }
        let _ = tx.send(tops);
    });

    let tops = rx
        .recv_timeout(std::time::Duration::from_secs(3))
        .expect("render blocked on the scheduler");
    assert!(tops[0] < 12.0 && tops[0] > 1.0);
    assert_eq!(tops.last().copied(), Some(1.0));
}
