//! LabelField widget with FSM-tracked interaction states
//!
//! The LabelField provides:
//! - Text and focus state, seeded from the owner's value
//! - A floating label and holder inset that follow whether the field has content
//! - Owner callbacks for focus, blur and text changes that can never corrupt state
//! - Imperative focus/blur/clear through an attached input handle
//!
//! Content drives the animation, focus does not: the label floats whenever
//! the field holds text, focused or not. Focus only recolors the header.
//!
//! # Controlled and uncontrolled fields
//!
//! The host calls [`LabelField::on_external_value_changed`] from its update
//! hook. When the owner supplies a value that differs from the current text,
//! the text is overwritten; supplying it on every update makes the field
//! controlled, supplying it once leaves later user edits alone.

use std::panic::{self, AssertUnwindSafe};

use labelfield_animation::SchedulerHandle;
use labelfield_core::events::{event_types, Event, EventType};
use labelfield_core::fsm::{StateId, StateMachine};
use labelfield_core::{has_content, stringify, CallbackError, FieldError, FieldValue};

use crate::config::{ContainerStyle, LabelFieldConfig, StyleOverride};
use crate::field_holder::FieldHolder;
use crate::floating_label::FloatingLabel;
use crate::input::InputHandle;
use crate::view::{Border, FieldBody, InputView, LabelFieldView, LabelText};
use crate::widget::Widget;

/// Field interaction states
pub mod states {
    use labelfield_core::fsm::StateId;

    pub const EMPTY_BLURRED: StateId = 0;
    pub const EMPTY_FOCUSED: StateId = 1;
    pub const FILLED_BLURRED: StateId = 2;
    pub const FILLED_FOCUSED: StateId = 3;
}

/// Handler for focus and blur notifications
pub type FocusHandler = Box<dyn FnMut(&Event) -> Result<(), CallbackError> + Send>;

/// Handler for text change notifications
pub type ChangeHandler = Box<dyn FnMut(&str) -> Result<(), CallbackError> + Send>;

/// Current phase of a field, derived from its state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPhase {
    EmptyBlurred,
    EmptyFocused,
    FilledBlurred,
    FilledFocused,
}

impl FieldPhase {
    fn from_state(state: StateId) -> Self {
        match state {
            states::EMPTY_FOCUSED => FieldPhase::EmptyFocused,
            states::FILLED_BLURRED => FieldPhase::FilledBlurred,
            states::FILLED_FOCUSED => FieldPhase::FilledFocused,
            _ => FieldPhase::EmptyBlurred,
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, FieldPhase::FilledBlurred | FieldPhase::FilledFocused)
    }

    pub fn is_focused(&self) -> bool {
        matches!(self, FieldPhase::EmptyFocused | FieldPhase::FilledFocused)
    }
}

/// Text and focus owned by a field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub text: Option<String>,
    pub focused: bool,
}

impl FieldState {
    pub fn has_content(&self) -> bool {
        has_content(self.text.as_deref())
    }
}

/// Owner-supplied field properties
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelFieldProps {
    /// External content; keep it fresh to make the field controlled
    pub value: Option<FieldValue>,
    /// Seed for an uncontrolled field
    pub default_value: Option<FieldValue>,
    /// Placeholder and header text
    pub label: String,
    pub with_border: bool,
    pub style: ContainerStyle,
    pub label_style: StyleOverride,
    pub value_style: StyleOverride,
    pub max_length: Option<usize>,
}

/// Decide whether an external value overwrites the current text.
///
/// Both sides are compared in string form, so an owner passing `0` for a
/// field holding `"0"` is not a change. Returns the new text when the
/// external value is present and differs.
pub fn reconcile(current: Option<&str>, external: Option<&FieldValue>) -> Option<String> {
    let external = external?;
    let incoming = stringify(Some(external));
    if incoming == current.unwrap_or_default() {
        None
    } else {
        Some(incoming)
    }
}

/// Text field with a floating label
pub struct LabelField {
    props: LabelFieldProps,
    config: LabelFieldConfig,
    state: FieldState,
    fsm: StateMachine,
    label: FloatingLabel,
    holder: FieldHolder,
    input: Option<Box<dyn InputHandle>>,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
    on_change_text_value: Option<ChangeHandler>,
}

impl LabelField {
    /// Mount a field with the default configuration
    pub fn new(handle: SchedulerHandle, props: LabelFieldProps) -> Self {
        Self::with_config(handle, props, LabelFieldConfig::default())
    }

    /// Mount a field with a custom configuration
    pub fn with_config(
        handle: SchedulerHandle,
        props: LabelFieldProps,
        config: LabelFieldConfig,
    ) -> Self {
        let seed = props.value.as_ref().or(props.default_value.as_ref());
        let state = FieldState {
            text: seed.map(ToString::to_string),
            focused: false,
        };

        let filled = state.has_content();
        let fsm = Self::create_fsm(filled);
        let label = FloatingLabel::new(handle.clone(), filled, config.label_motion());
        let holder = FieldHolder::new(handle, filled, config.holder_motion());

        tracing::debug!(label = %props.label, filled, "label field mounted");

        Self {
            props,
            config,
            state,
            fsm,
            label,
            holder,
            input: None,
            on_focus: None,
            on_blur: None,
            on_change_text_value: None,
        }
    }

    /// Create the field FSM
    fn create_fsm(filled: bool) -> StateMachine {
        let initial = if filled {
            states::FILLED_BLURRED
        } else {
            states::EMPTY_BLURRED
        };

        StateMachine::builder(initial)
            .on(states::EMPTY_BLURRED, event_types::FOCUS, states::EMPTY_FOCUSED)
            .on(states::FILLED_BLURRED, event_types::FOCUS, states::FILLED_FOCUSED)
            .on(states::EMPTY_FOCUSED, event_types::BLUR, states::EMPTY_BLURRED)
            .on(states::FILLED_FOCUSED, event_types::BLUR, states::FILLED_BLURRED)
            .on(states::EMPTY_BLURRED, event_types::CONTENT_FILLED, states::FILLED_BLURRED)
            .on(states::EMPTY_FOCUSED, event_types::CONTENT_FILLED, states::FILLED_FOCUSED)
            .on(states::FILLED_BLURRED, event_types::CONTENT_EMPTIED, states::EMPTY_BLURRED)
            .on(states::FILLED_FOCUSED, event_types::CONTENT_EMPTIED, states::EMPTY_FOCUSED)
            .name(states::EMPTY_BLURRED, "empty-blurred")
            .name(states::EMPTY_FOCUSED, "empty-focused")
            .name(states::FILLED_BLURRED, "filled-blurred")
            .name(states::FILLED_FOCUSED, "filled-focused")
            .build()
    }

    // ------------------------------------------------------------------
    // Owner callbacks
    // ------------------------------------------------------------------

    pub fn set_on_focus<F>(&mut self, callback: F)
    where
        F: FnMut(&Event) -> Result<(), CallbackError> + Send + 'static,
    {
        self.on_focus = Some(Box::new(callback));
    }

    pub fn set_on_blur<F>(&mut self, callback: F)
    where
        F: FnMut(&Event) -> Result<(), CallbackError> + Send + 'static,
    {
        self.on_blur = Some(Box::new(callback));
    }

    pub fn set_on_change_text_value<F>(&mut self, callback: F)
    where
        F: FnMut(&str) -> Result<(), CallbackError> + Send + 'static,
    {
        self.on_change_text_value = Some(Box::new(callback));
    }

    // ------------------------------------------------------------------
    // Input handle
    // ------------------------------------------------------------------

    /// Attach the underlying input once it exists
    pub fn attach_input(&mut self, input: impl InputHandle + 'static) {
        self.input = Some(Box::new(input));
    }

    /// Detach and return the underlying input
    pub fn detach_input(&mut self) -> Option<Box<dyn InputHandle>> {
        self.input.take()
    }

    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }

    fn with_input<R>(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut dyn InputHandle) -> labelfield_core::Result<R>,
    ) -> Option<R> {
        let result = match self.input.as_deref_mut() {
            Some(input) => f(input),
            None => Err(FieldError::InputUnavailable),
        };
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!("{} ignored: {}", op, err);
                None
            }
        }
    }

    /// Focus the input; a no-op without an input
    pub fn focus(&mut self) {
        self.with_input("focus", |input| input.focus());
    }

    /// Blur the input; a no-op without an input
    pub fn blur(&mut self) {
        self.with_input("blur", |input| input.blur());
    }

    /// Clear the input's text; a no-op without an input.
    ///
    /// The field's own text follows once the input reports the change.
    pub fn clear(&mut self) {
        self.with_input("clear", |input| input.clear());
    }

    /// Whether the input has focus; false without an input
    pub fn is_focused(&self) -> bool {
        let Some(input) = self.input.as_deref() else {
            return false;
        };
        input.is_focused().unwrap_or_else(|err| {
            tracing::debug!("is_focused ignored: {}", err);
            false
        })
    }

    // ------------------------------------------------------------------
    // Input events
    // ------------------------------------------------------------------

    /// The input gained focus
    pub fn handle_focus(&mut self) {
        self.focus_changed(&Event::focus());
    }

    /// The input lost focus
    pub fn handle_blur(&mut self) {
        self.focus_changed(&Event::blur());
    }

    /// The user edited the input's text
    pub fn handle_change_text(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.set_text(Some(value.clone()));

        if let Some(callback) = self.on_change_text_value.as_mut() {
            notify("on_change_text_value", || callback(value.as_str()));
        }
    }

    fn focus_changed(&mut self, event: &Event) {
        let focused = event.event_type == event_types::FOCUS;
        self.state.focused = focused;
        self.fsm.send(event.event_type);

        let callback = if focused {
            self.on_focus.as_mut()
        } else {
            self.on_blur.as_mut()
        };
        if let Some(callback) = callback {
            let name = if focused { "on_focus" } else { "on_blur" };
            notify(name, || callback(event));
        }
    }

    // ------------------------------------------------------------------
    // Owner updates
    // ------------------------------------------------------------------

    /// Apply a value pushed by the owner's update cycle.
    ///
    /// Overwrites the text when the value is present and differs from it in
    /// string form; an absent value leaves the text alone.
    pub fn on_external_value_changed(&mut self, value: Option<FieldValue>) {
        if let Some(text) = reconcile(self.state.text.as_deref(), value.as_ref()) {
            tracing::debug!(
                from = ?self.state.text,
                to = %text,
                "reconciling external value"
            );
            self.set_text(Some(text));
        }
        self.props.value = value;
    }

    /// Replace the owner props, reconciling the new value
    pub fn set_props(&mut self, props: LabelFieldProps) {
        let value = props.value.clone();
        self.props = LabelFieldProps { value: None, ..props };
        self.on_external_value_changed(value);
        self.sync();
    }

    pub fn props(&self) -> &LabelFieldProps {
        &self.props
    }

    pub fn config(&self) -> &LabelFieldConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    fn set_text(&mut self, text: Option<String>) {
        self.state.text = text;
        let event = if self.state.has_content() {
            event_types::CONTENT_FILLED
        } else {
            event_types::CONTENT_EMPTIED
        };
        self.fsm.send(event);
        self.sync();
    }

    /// Retarget the label and holder from the current content
    fn sync(&mut self) {
        let filled = self.state.has_content();
        self.label.set_visible(filled);
        self.holder.set_with_value(filled);
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn text(&self) -> Option<&str> {
        self.state.text.as_deref()
    }

    pub fn has_content(&self) -> bool {
        self.state.has_content()
    }

    pub fn phase(&self) -> FieldPhase {
        FieldPhase::from_state(self.fsm.current_state())
    }

    /// Transitions taken so far, oldest first
    pub fn history(&self) -> &[(StateId, EventType, StateId)] {
        self.fsm.history()
    }

    pub fn floating_label(&self) -> &FloatingLabel {
        &self.label
    }

    pub fn holder(&self) -> &FieldHolder {
        &self.holder
    }

    /// Whether the label or holder is still moving
    pub fn is_animating(&self) -> bool {
        self.label.is_animating() || self.holder.is_animating()
    }

    /// Tear the field down, detaching its animations from the scheduler
    pub fn unmount(mut self) {
        self.input = None;
        tracing::debug!(label = %self.props.label, "label field unmounted");
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Build the field's view for the current frame
    pub fn build(&self) -> LabelFieldView {
        let filled = self.state.has_content();
        let config = &self.config;
        let label = &self.props.label;

        let label_color = if self.state.focused {
            config.focused_label_color
        } else {
            self.props.label_style.color.unwrap_or(config.label_color)
        };
        let label_text = LabelText {
            text: filled.then(|| label.clone()),
            color: label_color,
            font_size: self
                .props
                .label_style
                .font_size
                .unwrap_or(config.label_font_size),
            height: self.props.label_style.height.unwrap_or(config.label_height),
        };

        let input = InputView {
            value: self.state.text.clone().unwrap_or_default(),
            placeholder: (!filled).then(|| label.clone()),
            default_value: self.props.default_value.as_ref().map(ToString::to_string),
            max_length: self.props.max_length,
            horizontal_padding: config.horizontal_padding,
            font_size: self
                .props
                .value_style
                .font_size
                .unwrap_or(config.value_font_size),
            color: self.props.value_style.color.unwrap_or(config.value_color),
            height: self
                .props
                .value_style
                .height
                .unwrap_or(config.container_height),
        };

        let style = &self.props.style;
        let border = self.props.with_border.then(|| Border {
            width: style.border_width.unwrap_or(config.border_width),
            color: style.border_color.unwrap_or(config.border_color),
        });

        LabelFieldView {
            height: style.height.unwrap_or(config.container_height),
            border,
            content: self.holder.render(FieldBody {
                label: self.label.render(label_text),
                input,
            }),
        }
    }
}

impl Widget for LabelField {
    type View = LabelFieldView;

    fn render(&self) -> LabelFieldView {
        self.build()
    }

    fn handle_event(&mut self, event: &Event) {
        match event.event_type {
            event_types::FOCUS | event_types::BLUR => self.focus_changed(event),
            event_types::TEXT_CHANGE => {
                if let Some(text) = event.text() {
                    self.handle_change_text(text);
                }
            }
            _ => {}
        }
    }
}

/// Call an owner callback, discarding whatever goes wrong inside it.
///
/// Callers commit their own state first; a failing or panicking callback is
/// logged and otherwise has no effect.
fn notify(name: &'static str, callback: impl FnOnce() -> Result<(), CallbackError>) {
    let err = match panic::catch_unwind(AssertUnwindSafe(callback)) {
        Ok(Ok(())) => return,
        Ok(Err(err)) => FieldError::Callback {
            name,
            message: err.to_string(),
        },
        Err(payload) => FieldError::CallbackPanicked {
            name,
            message: panic_message(payload.as_ref()),
        },
    };
    tracing::warn!("{}", err);
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

/// Create a label field with a label
pub fn label_field(label: impl Into<String>) -> LabelFieldBuilder {
    LabelFieldBuilder {
        props: LabelFieldProps {
            label: label.into(),
            ..Default::default()
        },
        config: LabelFieldConfig::default(),
        on_focus: None,
        on_blur: None,
        on_change_text_value: None,
    }
}

/// Builder for creating label fields
pub struct LabelFieldBuilder {
    props: LabelFieldProps,
    config: LabelFieldConfig,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
    on_change_text_value: Option<ChangeHandler>,
}

impl LabelFieldBuilder {
    /// Set the external value
    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.props.value = Some(value.into());
        self
    }

    /// Set the uncontrolled seed value
    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.props.default_value = Some(value.into());
        self
    }

    /// Draw a bottom border
    pub fn with_border(mut self, with_border: bool) -> Self {
        self.props.with_border = with_border;
        self
    }

    pub fn style(mut self, style: ContainerStyle) -> Self {
        self.props.style = style;
        self
    }

    pub fn label_style(mut self, style: StyleOverride) -> Self {
        self.props.label_style = style;
        self
    }

    pub fn value_style(mut self, style: StyleOverride) -> Self {
        self.props.value_style = style;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.props.max_length = Some(max_length);
        self
    }

    /// Use a custom configuration
    pub fn config(mut self, config: LabelFieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_focus<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Event) -> Result<(), CallbackError> + Send + 'static,
    {
        self.on_focus = Some(Box::new(callback));
        self
    }

    pub fn on_blur<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Event) -> Result<(), CallbackError> + Send + 'static,
    {
        self.on_blur = Some(Box::new(callback));
        self
    }

    pub fn on_change_text_value<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) -> Result<(), CallbackError> + Send + 'static,
    {
        self.on_change_text_value = Some(Box::new(callback));
        self
    }

    /// Mount the field
    pub fn build(self, handle: SchedulerHandle) -> LabelField {
        let mut field = LabelField::with_config(handle, self.props, self.config);
        field.on_focus = self.on_focus;
        field.on_blur = self.on_blur;
        field.on_change_text_value = self.on_change_text_value;
        field
    }
}
