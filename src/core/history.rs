//! State transition history tracking.
//!
//! Every transition the dispatcher performs is appended here, together with
//! the event that caused it (or `None` for a redirect requested by a hook).

use super::state::State;
use crate::dispatch::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use memory_duel::core::StateTransition;
/// use memory_duel::dispatch::Event;
/// use memory_duel::game::GameState;
/// use memory_duel::hardware::ButtonId;
///
/// let transition = StateTransition {
///     from: GameState::PlayerOneTurn,
///     to: GameState::PlayerOneReplay,
///     timestamp: Utc::now(),
///     event: Some(Event::Press(ButtonId::Three)),
/// };
/// assert!(!transition.is_redirect());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Table event that fired the transition, `None` for hook redirects
    pub event: Option<Event>,
}

impl<S: State> StateTransition<S> {
    /// True when a hook requested this transition rather than the table.
    pub fn is_redirect(&self) -> bool {
        self.event.is_none()
    }
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition added and leaves the
/// original untouched. The dispatcher owns its history and appends in place
/// with `push`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition, in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Count how many times `state` was entered.
    pub fn visits(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
