//! Core state machine types.
//!
//! - State definitions via the `State` trait
//! - Immutable history of performed transitions
//!
//! Nothing in this module touches hardware.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
