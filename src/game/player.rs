//! Player names and scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named player and their running score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    name: String,
    score: u32,
}

impl PlayerScore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// Award one point.
    pub fn increment(&mut self) {
        self.score += 1;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub(crate) fn with_score(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for PlayerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_at_zero() {
        let player = PlayerScore::new("P1");
        assert_eq!(player.name(), "P1");
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn increment_adds_exactly_one() {
        let mut player = PlayerScore::new("P2");
        player.increment();
        player.increment();
        assert_eq!(player.score(), 2);
    }

    #[test]
    fn renders_as_name_colon_score() {
        let mut player = PlayerScore::new("P1");
        player.increment();
        assert_eq!(player.to_string(), "P1:1");
    }
}
