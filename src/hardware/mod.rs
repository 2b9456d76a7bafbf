//! Hardware collaborators consumed by the game.
//!
//! The game never talks to GPIO pins directly. It sees four device kinds
//! through small traits ([`Button`], [`Light`], [`Buzzer`], [`Display`]) and,
//! one level up, a single [`Hardware`] capability that bundles a full
//! four-button console. [`Panel`] builds that bundle out of boxed devices;
//! [`ScriptedPanel`] replays canned button frames for tests and simulations.

mod error;
mod panel;
mod scripted;
mod timer;

pub use error::PanelError;
pub use panel::{Panel, PanelBuilder};
pub use scripted::{PanelOutput, ScriptedPanel};
pub use timer::{SoftwareTimer, Timer};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of buttons (and matching lights) on the console.
pub const BUTTON_COUNT: usize = 4;

/// Logical button index. Button `n` pairs with light `n` and with the
/// sequence symbol `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonId {
    One,
    Two,
    Three,
    Four,
}

impl ButtonId {
    pub const ALL: [ButtonId; BUTTON_COUNT] =
        [ButtonId::One, ButtonId::Two, ButtonId::Three, ButtonId::Four];

    /// Zero-based position, matching the order buttons were added.
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
        }
    }

    /// The sequence symbol (1..=4) this button answers.
    pub fn symbol(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Map a sequence symbol back to its button. Anything outside 1..=4
    /// has no button.
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button{}", self.symbol())
    }
}

/// Snapshot of all four button levels taken in one poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonStates([bool; BUTTON_COUNT]);

impl ButtonStates {
    pub fn new(levels: [bool; BUTTON_COUNT]) -> Self {
        Self(levels)
    }

    /// Nothing held.
    pub fn released() -> Self {
        Self::default()
    }

    /// Only `button` held.
    pub fn only(button: ButtonId) -> Self {
        let mut levels = [false; BUTTON_COUNT];
        levels[button.index()] = true;
        Self(levels)
    }

    pub fn is_pressed(&self, button: ButtonId) -> bool {
        self.0[button.index()]
    }

    pub fn set(&mut self, button: ButtonId, pressed: bool) {
        self.0[button.index()] = pressed;
    }

    /// Buttons currently held, in index order.
    pub fn pressed(&self) -> impl Iterator<Item = ButtonId> + '_ {
        ButtonId::ALL
            .into_iter()
            .filter(move |button| self.is_pressed(*button))
    }

    /// True if any button other than `except` is held.
    pub fn any_other(&self, except: ButtonId) -> bool {
        self.pressed().any(|button| button != except)
    }
}

/// A momentary push button, read by level.
///
/// A held button reads as pressed on every poll; callers that need one
/// action per press must track progression themselves.
pub trait Button {
    fn is_pressed(&mut self) -> bool;
}

/// An indicator light.
pub trait Light {
    /// Flash once. Blocks for the flash duration.
    fn blink(&mut self);
}

/// A tone emitter.
pub trait Buzzer {
    fn beep(&mut self, tone_hz: u32);
}

/// A small text display.
pub trait Display {
    fn show_text(&mut self, text: &str);
    fn reset(&mut self);
}

/// Everything the game needs from a four-button console.
///
/// The dispatcher reads buttons through this trait to raise events, and the
/// game's replay loop reads it directly while a player is answering.
pub trait Hardware {
    /// Poll every button once.
    fn read_buttons(&mut self) -> ButtonStates;

    /// Flash the light paired with `light`. Blocks until the flash ends.
    fn blink(&mut self, light: ButtonId);

    fn beep(&mut self, tone_hz: u32);

    fn show_text(&mut self, text: &str);

    fn reset_display(&mut self);
}
