//! Game configuration.
//!
//! Configuration is plain JSON with every field optional:
//!
//! ```json
//! {
//!     "player_one": "P1",
//!     "player_two": "P2",
//!     "initial_target_length": 2,
//!     "win_margin": 2,
//!     "win_tone_hz": 250,
//!     "poll_interval_ms": 100,
//!     "blink_ms": 300,
//!     "wire_player_one_steal": false
//! }
//! ```
//!
//! Validation collects every problem in one pass with stillwater's
//! `Validation` rather than stopping at the first one.

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Tunables for one game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_one: String,
    pub player_two: String,
    /// Starting target length for both players.
    pub initial_target_length: usize,
    /// Score gap that ends the game.
    pub win_margin: u32,
    pub win_tone_hz: u32,
    pub poll_interval_ms: u64,
    /// How long a light stays lit per blink.
    pub blink_ms: u64,
    /// Give player one's steal prompt (state 6) the same exits as player
    /// two's. Off by default, which leaves state 6 without an exit.
    pub wire_player_one_steal: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: "P1".to_string(),
            player_two: "P2".to_string(),
            initial_target_length: 2,
            win_margin: 2,
            win_tone_hz: 250,
            poll_interval_ms: 100,
            blink_ms: 300,
            wire_player_one_steal: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Return `self` if it passes every check, otherwise all violations.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Run every check, accumulating ALL violations.
    pub fn validate(&self) -> Check {
        let checks = vec![
            non_empty(&self.player_one, 1),
            non_empty(&self.player_two, 2),
            ensure(
                self.player_one != self.player_two || self.player_one.is_empty(),
                || ConfigViolation::DuplicateNames(self.player_one.clone()),
            ),
            ensure(self.initial_target_length >= 1, || {
                ConfigViolation::ZeroTargetLength
            }),
            ensure(self.win_margin >= 1, || ConfigViolation::ZeroWinMargin),
            ensure((20..=20_000).contains(&self.win_tone_hz), || {
                ConfigViolation::InaudibleTone {
                    hz: self.win_tone_hz,
                }
            }),
            ensure((1..=1_000).contains(&self.poll_interval_ms), || {
                ConfigViolation::PollInterval {
                    ms: self.poll_interval_ms,
                }
            }),
            ensure(self.blink_ms > 0, || ConfigViolation::ZeroBlink),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn blink_duration(&self) -> Duration {
        Duration::from_millis(self.blink_ms)
    }
}

fn ensure(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn non_empty(name: &str, seat: u8) -> Check {
    ensure(!name.trim().is_empty(), || ConfigViolation::EmptyName { seat })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_success());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = GameConfig::from_json_str(r#"{ "player_one": "Ada" }"#).unwrap();

        assert_eq!(config.player_one, "Ada");
        assert_eq!(config.player_two, "P2");
        assert_eq!(config.initial_target_length, 2);
        assert_eq!(config.win_margin, 2);
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
        assert!(!config.wire_player_one_steal);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = GameConfig {
            player_one: String::new(),
            initial_target_length: 0,
            win_tone_hz: 5,
            poll_interval_ms: 0,
            ..GameConfig::default()
        };

        match config.validate() {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 4);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ConfigViolation::EmptyName { seat: 1 })));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ConfigViolation::ZeroTargetLength)));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ConfigViolation::InaudibleTone { hz: 5 })));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ConfigViolation::PollInterval { ms: 0 })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let config = GameConfig {
            player_two: "P1".to_string(),
            ..GameConfig::default()
        };

        let result = config.validated();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(ref v)) if v == &vec![ConfigViolation::DuplicateNames("P1".to_string())]
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = GameConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_error_lists_every_violation() {
        let err = GameConfig::from_json_str(r#"{ "win_margin": 0, "blink_ms": 0 }"#).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("Win margin"));
        assert!(message.contains("Blink duration"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = GameConfig::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
