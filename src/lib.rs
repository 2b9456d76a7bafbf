//! Memory Duel: a two-player memorize-and-repeat button game
//!
//! The game runs on a console with four buttons, four lights, a buzzer and
//! a text display. Players take turns repeating a growing light sequence;
//! a miss lets the opponent steal the point, and a two-point lead wins.
//!
//! # Core Concepts
//!
//! - **State**: typed states via the `State` trait
//! - **Dispatcher**: polls buttons and timers and calls entry/do/exit hooks
//! - **GameStateMachine**: the game's rules behind those hooks
//! - **Hardware**: the console, as traits the game consumes
//!
//! # Example
//!
//! ```rust
//! use memory_duel::config::GameConfig;
//! use memory_duel::game::{GameState, GameStateMachine};
//! use memory_duel::hardware::{ButtonId, ScriptedPanel};
//!
//! let machine = GameStateMachine::seeded(GameConfig::default(), 7);
//! let mut dispatcher = machine.into_dispatcher(ScriptedPanel::new());
//!
//! dispatcher.hardware_mut().press(ButtonId::One);
//! dispatcher.tick().unwrap();
//!
//! assert_eq!(dispatcher.current_state(), &GameState::PlayerOneReplay);
//! assert_eq!(dispatcher.handler().sequence().len(), 2);
//! ```

pub mod config;
pub mod core;
pub mod dispatch;
pub mod game;
pub mod hardware;

// Re-export commonly used types
pub use config::GameConfig;
pub use core::{State, StateHistory, StateTransition};
pub use dispatch::{Dispatcher, Event, StateHandler};
pub use game::{GameState, GameStateMachine, PlayerScore};
pub use hardware::{ButtonId, Hardware};
