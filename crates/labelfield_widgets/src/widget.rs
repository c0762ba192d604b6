//! Base widget trait

use labelfield_core::events::Event;

/// Base trait for all widgets
pub trait Widget {
    /// Plain-data description of what to draw
    type View;

    /// Render the widget's current state
    fn render(&self) -> Self::View;

    /// Handle an event from the input primitive
    fn handle_event(&mut self, event: &Event);
}
