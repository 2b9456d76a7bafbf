//! Events, table rules and the hook trait the dispatcher calls.

use crate::core::State;
use crate::hardware::ButtonId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something the dispatcher observed during a poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    Press(ButtonId),
    Release(ButtonId),
    Timeout,
}

impl Event {
    /// Press events for all four buttons.
    pub const ANY_PRESS: [Event; 4] = [
        Event::Press(ButtonId::One),
        Event::Press(ButtonId::Two),
        Event::Press(ButtonId::Three),
        Event::Press(ButtonId::Four),
    ];
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Press(button) => write!(f, "{button} press"),
            Self::Release(button) => write!(f, "{button} release"),
            Self::Timeout => f.write_str("timeout"),
        }
    }
}

/// Errors that can occur while dispatching
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DispatchError {
    #[error("Entry hooks redirected {hops} times in a row starting from '{from}'")]
    RedirectLoop { from: String, hops: usize },
}

/// One row of the transition table: leave `from` for `to` when any of
/// `events` fires.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRule<S: State> {
    pub from: S,
    pub events: Vec<Event>,
    pub to: S,
}

impl<S: State> TransitionRule<S> {
    /// Check if this rule fires for `event` in state `current` (pure)
    pub fn matches(&self, current: &S, event: Event) -> bool {
        *current == self.from && self.events.contains(&event)
    }
}

/// Entry/do/exit hooks driven by the dispatcher.
///
/// Hooks run synchronously on the dispatcher's thread and get exclusive
/// access to the hardware. `state_entered` and `state_do` may request an
/// immediate transition by returning `Some(target)`; such a redirect wins
/// over any table transition for the same tick.
pub trait StateHandler<H> {
    type State: State;

    fn state_entered(
        &mut self,
        state: &Self::State,
        event: Option<Event>,
        hardware: &mut H,
    ) -> Option<Self::State>;

    fn state_do(&mut self, state: &Self::State, hardware: &mut H) -> Option<Self::State>;

    fn state_left(&mut self, state: &Self::State, event: Option<Event>, hardware: &mut H);
}
