//! Errors raised while assembling a [`Panel`](super::Panel).

use thiserror::Error;

/// Errors that can occur when building a panel.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("A panel takes at most 4 buttons")]
    TooManyButtons,

    #[error("A panel takes at most 4 lights")]
    TooManyLights,

    #[error("Expected 4 buttons, found {found}. Call .button(device) for each")]
    MissingButtons { found: usize },

    #[error("Expected 4 lights, found {found}. Call .light(device) for each")]
    MissingLights { found: usize },

    #[error("Buzzer not specified. Call .buzzer(device) before .build()")]
    MissingBuzzer,

    #[error("Display not specified. Call .display(device) before .build()")]
    MissingDisplay,
}
