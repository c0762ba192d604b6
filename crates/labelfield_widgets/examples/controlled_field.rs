//! Controlled Field Demo
//!
//! Simulates a host driving a label field headlessly:
//! - An owner that re-renders with the typed value on every keystroke
//! - A 60fps frame loop ticking the animation scheduler
//! - Frames printed as the label floats up and back down
//!
//! Run with: RUST_LOG=debug cargo run -p labelfield_widgets --example controlled_field

use std::sync::{Arc, Mutex};

use anyhow::Result;
use labelfield_animation::{AnimationScheduler, SharedScheduler};
use labelfield_core::FieldValue;
use labelfield_widgets::{label_field, LabelField, LabelFieldConfig, Widget};
use tracing_subscriber::EnvFilter;

const FRAME_MS: f32 = 1000.0 / 60.0;

const CONFIG: &str = r##"
value_offset = 10.0
animation_duration_ms = 230
focused_label_color = "#1482fe"
"##;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = LabelFieldConfig::from_toml_str(CONFIG)?;
    let scheduler = AnimationScheduler::new_shared();
    let owner_value = Arc::new(Mutex::new(String::new()));
    let owner_value_cb = owner_value.clone();

    let mut field = label_field("Name")
        .value("")
        .with_border(true)
        .config(config)
        .on_change_text_value(move |text| {
            *owner_value_cb.lock().map_err(|e| e.to_string())? = text.to_owned();
            Ok(())
        })
        .build(scheduler.handle());

    field.handle_focus();
    for typed in ["A", "Ad", "Ada"] {
        field.handle_change_text(typed);
        let value = owner_value.lock().map_err(|e| anyhow::anyhow!("{e}"))?.clone();
        field.on_external_value_changed(Some(FieldValue::from(value)));
        run_frames(&scheduler, &field, 3);
    }
    run_until_settled(&scheduler, &field);

    // Owner resets the form
    field.on_external_value_changed(Some(FieldValue::from("")));
    field.handle_blur();
    run_until_settled(&scheduler, &field);

    field.unmount();
    Ok(())
}

fn run_frames(scheduler: &SharedScheduler, field: &LabelField, frames: usize) {
    for _ in 0..frames {
        scheduler.advance(FRAME_MS);
        print_frame(field);
    }
}

fn run_until_settled(scheduler: &SharedScheduler, field: &LabelField) {
    while field.is_animating() {
        run_frames(scheduler, field, 1);
    }
}

fn print_frame(field: &LabelField) {
    let view = field.render();
    let label = view.label();
    tracing::info!(
        phase = ?field.phase(),
        value = %view.input().value,
        label_top = %format!("{:.2}", label.top),
        label_opacity = %format!("{:.2}", label.opacity),
        holder = %format!("{:.2}", view.holder_offset()),
        "frame"
    );
}
