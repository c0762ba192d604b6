//! State Machine Runtime
//!
//! Flat statecharts for field interaction states. A machine is a set of
//! `(from, event, to)` transitions; events with no matching transition leave
//! the state untouched. State names are optional and only used for logging.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::events::EventType;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Transition {
    from_state: StateId,
    event: EventType,
    to_state: StateId,
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: SmallVec<[Transition; 8]>,
    names: FxHashMap<StateId, &'static str>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: SmallVec::new(),
            names: FxHashMap::default(),
        }
    }

    /// Add a transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventType, to: StateId) -> Self {
        self.transitions.push(Transition {
            from_state: from,
            event,
            to_state: to,
        });
        self
    }

    /// Give a state a readable name for logs
    pub fn name(mut self, state: StateId, name: &'static str) -> Self {
        self.names.insert(state, name);
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            names: self.names,
            history: Vec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine {
    current_state: StateId,
    transitions: SmallVec<[Transition; 8]>,
    names: FxHashMap<StateId, &'static str>,
    /// History of state transitions (for debugging)
    history: Vec<(StateId, EventType, StateId)>,
}

impl StateMachine {
    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Readable name of a state, `"?"` if unnamed
    pub fn state_name(&self, state: StateId) -> &'static str {
        self.names.get(&state).copied().unwrap_or("?")
    }

    /// Get transition history
    pub fn history(&self) -> &[(StateId, EventType, StateId)] {
        &self.history
    }

    /// Send an event, returning the (possibly unchanged) current state
    pub fn send(&mut self, event: EventType) -> StateId {
        let current = self.current_state;
        let Some(to_state) = self.find(event) else {
            return current;
        };

        self.current_state = to_state;
        self.history.push((current, event, to_state));

        tracing::debug!(
            "fsm: {} --{}--> {}",
            self.state_name(current),
            event,
            self.state_name(to_state)
        );

        to_state
    }

    fn find(&self, event: EventType) -> Option<StateId> {
        self.transitions
            .iter()
            .find(|t| t.from_state == self.current_state && t.event == event)
            .map(|t| t.to_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: StateId = 0;
    const FILLED: StateId = 1;

    const FILL: EventType = 1;
    const EMPTY_OUT: EventType = 2;

    fn machine() -> StateMachine {
        StateMachine::builder(EMPTY)
            .on(EMPTY, FILL, FILLED)
            .on(FILLED, EMPTY_OUT, EMPTY)
            .name(EMPTY, "empty")
            .name(FILLED, "filled")
            .build()
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = machine();
        assert_eq!(fsm.current_state(), EMPTY);

        assert_eq!(fsm.send(FILL), FILLED);
        assert_eq!(fsm.current_state(), FILLED);

        assert_eq!(fsm.send(EMPTY_OUT), EMPTY);
        assert_eq!(fsm.current_state(), EMPTY);
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = machine();

        // Already empty, nothing to empty out
        fsm.send(EMPTY_OUT);
        assert_eq!(fsm.current_state(), EMPTY);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_history() {
        let mut fsm = machine();
        fsm.send(FILL);
        fsm.send(EMPTY_OUT);

        let history = fsm.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], (EMPTY, FILL, FILLED));
        assert_eq!(history[1], (FILLED, EMPTY_OUT, EMPTY));
    }

    #[test]
    fn test_state_names() {
        let fsm = machine();
        assert_eq!(fsm.state_name(FILLED), "filled");
        assert_eq!(fsm.state_name(99), "?");
    }
}
