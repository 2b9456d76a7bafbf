//! One-shot timers that the dispatcher turns into `Timeout` events.

use std::time::{Duration, Instant};

/// A timer device polled by the dispatcher.
pub trait Timer {
    /// Returns `true` once per expiry.
    fn expired(&mut self) -> bool;
}

/// Wall-clock one-shot timer.
#[derive(Debug, Default)]
pub struct SoftwareTimer {
    deadline: Option<Instant>,
}

impl SoftwareTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer. Re-arming replaces any pending deadline.
    pub fn start(&mut self, after: Duration) {
        self.deadline = Some(Instant::now() + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Timer for SoftwareTimer {
    fn expired(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
