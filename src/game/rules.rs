//! Pure scoring and round-length rules.

use serde::{Deserialize, Serialize};

/// Which of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    PlayerOne,
    PlayerTwo,
}

impl Seat {
    pub fn opponent(self) -> Self {
        match self {
            Self::PlayerOne => Self::PlayerTwo,
            Self::PlayerTwo => Self::PlayerOne,
        }
    }
}

/// Catch-up rule for a player's target length at the start of their round.
///
/// While scores are tied, a player who is already ahead in length keeps
/// their length. Otherwise the player's length is synced to the opponent's.
pub fn catch_up(own: usize, other: usize, scores_tied: bool) -> usize {
    if own > other && scores_tied {
        own
    } else {
        other
    }
}

/// The winner once the score gap reaches exactly `margin`, otherwise `None`.
pub fn decide(score1: u32, score2: u32, margin: u32) -> Option<Seat> {
    if score1.abs_diff(score2) != margin {
        return None;
    }
    Some(leader(score1, score2))
}

/// The player with the strictly higher score; ties go to player two.
pub fn leader(score1: u32, score2: u32) -> Seat {
    if score1 > score2 {
        Seat::PlayerOne
    } else {
        Seat::PlayerTwo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leader_keeps_length_while_tied() {
        assert_eq!(catch_up(4, 3, true), 4);
    }

    #[test]
    fn leader_syncs_when_scores_differ() {
        assert_eq!(catch_up(4, 3, false), 3);
    }

    #[test]
    fn trailing_player_catches_up() {
        assert_eq!(catch_up(2, 3, true), 3);
        assert_eq!(catch_up(2, 3, false), 3);
        assert_eq!(catch_up(3, 3, true), 3);
    }

    #[test]
    fn decide_needs_exact_margin() {
        assert_eq!(decide(0, 0, 2), None);
        assert_eq!(decide(1, 0, 2), None);
        assert_eq!(decide(2, 0, 2), Some(Seat::PlayerOne));
        assert_eq!(decide(1, 3, 2), Some(Seat::PlayerTwo));
        assert_eq!(decide(5, 1, 2), None);
    }

    #[test]
    fn leader_follows_the_higher_score() {
        assert_eq!(leader(3, 1), Seat::PlayerOne);
        assert_eq!(leader(1, 3), Seat::PlayerTwo);
    }

    #[test]
    fn opponent_swaps_seats() {
        assert_eq!(Seat::PlayerOne.opponent(), Seat::PlayerTwo);
        assert_eq!(Seat::PlayerTwo.opponent(), Seat::PlayerOne);
    }
}
