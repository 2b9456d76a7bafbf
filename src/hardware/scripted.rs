//! Scripted console for tests and headless simulations.
//!
//! Button input is a queue of frames: each [`Hardware::read_buttons`] call
//! consumes one frame, and an empty queue reads as "nothing held". Every
//! output (blink, beep, text, reset) is appended to a log that tests can
//! inspect.

use super::{ButtonId, ButtonStates, Hardware};
use std::collections::VecDeque;

/// Reads allowed on an empty script before the panel assumes the game is
/// stuck waiting for input that will never come.
const IDLE_READ_LIMIT: usize = 100_000;

/// One recorded output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelOutput {
    Blink(ButtonId),
    Beep(u32),
    Text(String),
    Reset,
}

#[derive(Debug, Default)]
pub struct ScriptedPanel {
    frames: VecDeque<ButtonStates>,
    outputs: Vec<PanelOutput>,
    idle_reads: usize,
}

impl ScriptedPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a single-frame press of `button` (held for one read).
    pub fn press(&mut self, button: ButtonId) -> &mut Self {
        self.frames.push_back(ButtonStates::only(button));
        self
    }

    /// Queue one single-frame press per symbol. Symbols outside 1..=4 are
    /// skipped.
    pub fn press_symbols(&mut self, symbols: &[u8]) -> &mut Self {
        for button in symbols.iter().copied().filter_map(ButtonId::from_symbol) {
            self.press(button);
        }
        self
    }

    /// Queue a frame with nothing held.
    pub fn idle(&mut self) -> &mut Self {
        self.frames.push_back(ButtonStates::released());
        self
    }

    /// Queue an arbitrary frame.
    pub fn frame(&mut self, states: ButtonStates) -> &mut Self {
        self.frames.push_back(states);
        self
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn outputs(&self) -> &[PanelOutput] {
        &self.outputs
    }

    /// Every text shown so far, oldest first.
    pub fn texts(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                PanelOutput::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.texts().last().copied()
    }

    /// Lights blinked so far, oldest first.
    pub fn blinks(&self) -> Vec<ButtonId> {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                PanelOutput::Blink(light) => Some(*light),
                _ => None,
            })
            .collect()
    }

    pub fn beeps(&self) -> Vec<u32> {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                PanelOutput::Beep(tone) => Some(*tone),
                _ => None,
            })
            .collect()
    }

    pub fn clear_outputs(&mut self) {
        self.outputs.clear();
    }
}

impl Hardware for ScriptedPanel {
    fn read_buttons(&mut self) -> ButtonStates {
        match self.frames.pop_front() {
            Some(states) => {
                self.idle_reads = 0;
                states
            }
            None => {
                self.idle_reads += 1;
                assert!(
                    self.idle_reads <= IDLE_READ_LIMIT,
                    "scripted panel ran out of frames while the game kept polling"
                );
                ButtonStates::released()
            }
        }
    }

    fn blink(&mut self, light: ButtonId) {
        self.outputs.push(PanelOutput::Blink(light));
    }

    fn beep(&mut self, tone_hz: u32) {
        self.outputs.push(PanelOutput::Beep(tone_hz));
    }

    fn show_text(&mut self, text: &str) {
        self.outputs.push(PanelOutput::Text(text.to_string()));
    }

    fn reset_display(&mut self) {
        self.outputs.push(PanelOutput::Reset);
    }
}
