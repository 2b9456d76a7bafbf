//! Configuration error types.

use thiserror::Error;

/// A single problem found while validating a [`GameConfig`](super::GameConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Player {seat} name is empty")]
    EmptyName { seat: u8 },

    #[error("Both players are named '{0}'")]
    DuplicateNames(String),

    #[error("Initial target length must be at least 1")]
    ZeroTargetLength,

    #[error("Win margin must be at least 1")]
    ZeroWinMargin,

    #[error("Win tone {hz} Hz is outside the audible 20..=20000 Hz range")]
    InaudibleTone { hz: u32 },

    #[error("Poll interval {ms} ms is outside 1..=1000 ms")]
    PollInterval { ms: u64 },

    #[error("Blink duration must be greater than zero")]
    ZeroBlink,
}

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid config JSON
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config parsed but breaks one or more rules
    #[error("Invalid config: {}", summarize(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
