//! The game's states and their numbering.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// The nine game states, labelled 0 to 8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GameState {
    /// 0: player one's turn begins.
    PlayerOneTurn,
    /// 1: player one replays the sequence.
    PlayerOneReplay,
    /// 2: player two may steal player one's point.
    PlayerTwoStealPrompt,
    /// 3: player two's steal replay.
    PlayerTwoSteal,
    /// 4: player two's turn begins.
    PlayerTwoTurn,
    /// 5: player two replays the sequence.
    PlayerTwoReplay,
    /// 6: player one may steal player two's point.
    PlayerOneStealPrompt,
    /// 7: player one's steal replay.
    PlayerOneSteal,
    /// 8: a winner has been decided.
    GameOver,
}

impl GameState {
    pub const ALL: [GameState; 9] = [
        GameState::PlayerOneTurn,
        GameState::PlayerOneReplay,
        GameState::PlayerTwoStealPrompt,
        GameState::PlayerTwoSteal,
        GameState::PlayerTwoTurn,
        GameState::PlayerTwoReplay,
        GameState::PlayerOneStealPrompt,
        GameState::PlayerOneSteal,
        GameState::GameOver,
    ];

    pub fn index(self) -> u8 {
        match self {
            Self::PlayerOneTurn => 0,
            Self::PlayerOneReplay => 1,
            Self::PlayerTwoStealPrompt => 2,
            Self::PlayerTwoSteal => 3,
            Self::PlayerTwoTurn => 4,
            Self::PlayerTwoReplay => 5,
            Self::PlayerOneStealPrompt => 6,
            Self::PlayerOneSteal => 7,
            Self::GameOver => 8,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// States whose do action runs a replay sub-round.
    pub fn is_replay(self) -> bool {
        matches!(
            self,
            Self::PlayerOneReplay | Self::PlayerTwoSteal | Self::PlayerTwoReplay | Self::PlayerOneSteal
        )
    }
}

impl State for GameState {
    fn name(&self) -> &str {
        match self {
            Self::PlayerOneTurn => "PlayerOneTurn",
            Self::PlayerOneReplay => "PlayerOneReplay",
            Self::PlayerTwoStealPrompt => "PlayerTwoStealPrompt",
            Self::PlayerTwoSteal => "PlayerTwoSteal",
            Self::PlayerTwoTurn => "PlayerTwoTurn",
            Self::PlayerTwoReplay => "PlayerTwoReplay",
            Self::PlayerOneStealPrompt => "PlayerOneStealPrompt",
            Self::PlayerOneSteal => "PlayerOneSteal",
            Self::GameOver => "GameOver",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::GameOver)
    }
}
