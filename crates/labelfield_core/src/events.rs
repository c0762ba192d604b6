//! Field events
//!
//! Events emitted by the underlying input primitive and consumed by the
//! label field. Keyboard handling stays with the input primitive; only the
//! outcomes it reports (focus changes and new text) travel through here.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    /// The input's text changed (user edit)
    pub const TEXT_CHANGE: EventType = 22;
    /// Field content went from empty to non-empty
    pub const CONTENT_FILLED: EventType = 23;
    /// Field content went from non-empty to empty
    pub const CONTENT_EMPTIED: EventType = 24;
}

/// A field event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    /// New text reported by the input
    Text { text: String },
    None,
}

impl Event {
    pub fn new(event_type: EventType, data: EventData) -> Self {
        Self { event_type, data }
    }

    pub fn focus() -> Self {
        Self::new(event_types::FOCUS, EventData::None)
    }

    pub fn blur() -> Self {
        Self::new(event_types::BLUR, EventData::None)
    }

    pub fn text_change(text: impl Into<String>) -> Self {
        Self::new(
            event_types::TEXT_CHANGE,
            EventData::Text { text: text.into() },
        )
    }

    /// Text payload, if this is a text-change event
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            EventData::Text { text } => Some(text),
            EventData::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_payload() {
        let event = Event::text_change("abc");
        assert_eq!(event.event_type, event_types::TEXT_CHANGE);
        assert_eq!(event.text(), Some("abc"));

        assert_eq!(Event::focus().text(), None);
    }
}
