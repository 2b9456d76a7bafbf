//! Event-driven dispatch loop around a [`StateHandler`].
//!
//! # Key Concepts
//!
//! - **Transition table**: `(from, [events], to)` rows consulted once per tick
//! - **Hooks**: entry/do/exit callbacks that may request a redirect
//! - **Events**: button press/release edges and timer expiry, one per tick
//!
//! Everything here is synchronous. A do hook that blocks (for example while
//! waiting on a button) blocks the loop, and that is the intended contract.

mod machine;
mod transition;

pub use machine::{Dispatcher, Tick, DEFAULT_POLL_INTERVAL, MAX_REDIRECTS};
pub use transition::{DispatchError, Event, StateHandler, TransitionRule};
