//! One replay sub-round: a player re-entering the sequence from the start.
//!
//! [`Replay::poll`] inspects one snapshot of the buttons and reports whether
//! the sub-round is still waiting, has succeeded, or has failed. The game
//! calls it in a tight loop; tests call it with hand-made snapshots.

use super::sequence::Sequence;
use crate::hardware::{ButtonId, ButtonStates};
use log::error;

/// Result of polling a replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayOutcome {
    Waiting,
    Success,
    Failure,
}

/// Cursor over the first `target` symbols of the sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Replay {
    cursor: usize,
    target: usize,
}

impl Replay {
    pub fn new(target: usize) -> Self {
        Self { cursor: 0, target }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn remaining(&self) -> usize {
        self.target.saturating_sub(self.cursor)
    }

    /// Consume one snapshot of button levels.
    ///
    /// The expected button advances the cursor and `on_hit` is called with
    /// it; any other button fails the sub-round. If the expected button is
    /// held together with others, the expected one wins. A symbol with no
    /// button, or a cursor past the end of the sequence, is logged and the
    /// replay keeps waiting.
    pub fn poll<F>(&mut self, sequence: &Sequence, states: ButtonStates, mut on_hit: F) -> ReplayOutcome
    where
        F: FnMut(ButtonId),
    {
        if self.cursor >= self.target {
            return ReplayOutcome::Success;
        }

        let Some(symbol) = sequence.get(self.cursor) else {
            error!(
                "Replay cursor {} is past the sequence end ({})",
                self.cursor,
                sequence.len()
            );
            return ReplayOutcome::Waiting;
        };
        let Some(expected) = ButtonId::from_symbol(symbol) else {
            error!("Invalid symbol {symbol} at position {}", self.cursor);
            return ReplayOutcome::Waiting;
        };

        if states.is_pressed(expected) {
            on_hit(expected);
            self.cursor += 1;
            if self.cursor >= self.target {
                ReplayOutcome::Success
            } else {
                ReplayOutcome::Waiting
            }
        } else if states.any_other(expected) {
            ReplayOutcome::Failure
        } else {
            ReplayOutcome::Waiting
        }
    }
}
