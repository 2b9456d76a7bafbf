//! Table-driven dispatcher that owns the hardware and calls state hooks.

use crate::core::{State, StateHistory, StateTransition};
use crate::dispatch::transition::{DispatchError, Event, StateHandler, TransitionRule};
use crate::hardware::{ButtonId, ButtonStates, Hardware, Timer};
use chrono::Utc;
use log::{debug, error};
use std::thread;
use std::time::Duration;

/// Poll interval used by [`Dispatcher::run_default`].
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Longest chain of entry-hook redirects followed in one transition.
pub const MAX_REDIRECTS: usize = 16;

/// What a single [`Dispatcher::tick`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum Tick<S: State> {
    /// The do hook ran, no event fired.
    Idle,
    /// The do hook requested a transition; carries the state settled in.
    Redirected(S),
    /// A table rule fired for `event`; carries the state settled in.
    Transitioned { event: Event, state: S },
    /// An event fired but no rule matched the current state.
    Ignored(Event),
}

/// Event-driven state dispatcher.
///
/// Each tick runs the current state's do hook, then polls the buttons and
/// timers for at most one event and applies the first matching table rule.
/// A redirect returned by a hook is applied before the table is consulted.
pub struct Dispatcher<M, H>
where
    M: StateHandler<H>,
{
    handler: M,
    hardware: H,
    current: M::State,
    rules: Vec<TransitionRule<M::State>>,
    timers: Vec<Box<dyn Timer>>,
    history: StateHistory<M::State>,
    last_buttons: ButtonStates,
    started: bool,
}

impl<M, H> Dispatcher<M, H>
where
    M: StateHandler<H>,
    H: Hardware,
{
    /// Create a dispatcher parked in `initial`. The initial entry hook runs
    /// on [`start`](Self::start) or the first tick.
    pub fn new(initial: M::State, handler: M, hardware: H) -> Self {
        Self {
            handler,
            hardware,
            current: initial,
            rules: Vec::new(),
            timers: Vec::new(),
            history: StateHistory::new(),
            last_buttons: ButtonStates::released(),
            started: false,
        }
    }

    /// Add a timer whose expiry raises [`Event::Timeout`].
    pub fn add_timer(&mut self, timer: impl Timer + 'static) {
        self.timers.push(Box::new(timer));
    }

    /// Leave `from` for `to` when any of `events` fires.
    pub fn add_transition(&mut self, from: M::State, events: &[Event], to: M::State) {
        self.rules.push(TransitionRule {
            from,
            events: events.to_vec(),
            to,
        });
    }

    pub fn add_rule(&mut self, rule: TransitionRule<M::State>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[TransitionRule<M::State>] {
        &self.rules
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &M::State {
        &self.current
    }

    /// Check if dispatcher is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn history(&self) -> &StateHistory<M::State> {
        &self.history
    }

    pub fn handler(&self) -> &M {
        &self.handler
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    /// Run the initial state's entry hook. Idempotent.
    pub fn start(&mut self) -> Result<(), DispatchError> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        debug!("Entering initial state '{}'", self.current.name());

        if let Some(target) = self
            .handler
            .state_entered(&self.current, None, &mut self.hardware)
        {
            self.transition(target, None)?;
        }
        Ok(())
    }

    /// Move to `target` right away, running exit and entry hooks.
    pub fn goto_state(&mut self, target: M::State) -> Result<(), DispatchError> {
        self.start()?;
        self.transition(target, None)
    }

    /// Execute one poll cycle.
    ///
    /// A do-hook redirect also samples the buttons once without raising an
    /// event, so a button still held from the old state is not a new press.
    pub fn tick(&mut self) -> Result<Tick<M::State>, DispatchError> {
        self.start()?;

        if let Some(target) = self.handler.state_do(&self.current, &mut self.hardware) {
            self.transition(target, None)?;
            // The hook may have read buttons itself. Whatever is held now
            // becomes the baseline, so only presses made in the new state fire.
            self.last_buttons = self.hardware.read_buttons();
            return Ok(Tick::Redirected(self.current.clone()));
        }

        let Some(event) = self.poll_event() else {
            return Ok(Tick::Idle);
        };

        let target = self
            .rules
            .iter()
            .find(|rule| rule.matches(&self.current, event))
            .map(|rule| rule.to.clone());

        match target {
            Some(to) => {
                self.transition(to, Some(event))?;
                Ok(Tick::Transitioned {
                    event,
                    state: self.current.clone(),
                })
            }
            None => Ok(Tick::Ignored(event)),
        }
    }

    /// Drive the loop until a final state's do hook has run once.
    ///
    /// Sleeps `poll_interval` between ticks. Returns the final state.
    pub fn run(&mut self, poll_interval: Duration) -> Result<&M::State, DispatchError> {
        self.start()?;
        loop {
            let finishing = self.current.is_final();
            if let Err(e) = self.tick() {
                error!("Dispatcher stopped in '{}': {}", self.current.name(), e);
                return Err(e);
            }
            if finishing {
                return Ok(&self.current);
            }
            thread::sleep(poll_interval);
        }
    }

    /// [`run`](Self::run) with [`DEFAULT_POLL_INTERVAL`].
    pub fn run_default(&mut self) -> Result<&M::State, DispatchError> {
        self.run(DEFAULT_POLL_INTERVAL)
    }

    /// Raise at most one event: the first button whose level changed since
    /// the last poll, otherwise the first expired timer.
    fn poll_event(&mut self) -> Option<Event> {
        let states = self.hardware.read_buttons();
        for button in ButtonId::ALL {
            let pressed = states.is_pressed(button);
            if pressed != self.last_buttons.is_pressed(button) {
                self.last_buttons.set(button, pressed);
                return Some(if pressed {
                    Event::Press(button)
                } else {
                    Event::Release(button)
                });
            }
        }

        if self.timers.iter_mut().any(|timer| timer.expired()) {
            return Some(Event::Timeout);
        }
        None
    }

    /// Exit the current state, enter `target`, and follow any redirects the
    /// entry hooks request.
    fn transition(&mut self, target: M::State, event: Option<Event>) -> Result<(), DispatchError> {
        let origin = self.current.name().to_string();
        let mut next = target;
        let mut cause = event;

        for _ in 0..MAX_REDIRECTS {
            self.handler
                .state_left(&self.current, cause, &mut self.hardware);

            let from = std::mem::replace(&mut self.current, next);
            debug!(
                "Transition '{}' -> '{}' ({})",
                from.name(),
                self.current.name(),
                cause.map_or_else(|| "redirect".to_string(), |e| e.to_string())
            );
            self.history.push(StateTransition {
                from,
                to: self.current.clone(),
                timestamp: Utc::now(),
                event: cause,
            });

            match self
                .handler
                .state_entered(&self.current, cause, &mut self.hardware)
            {
                Some(redirect) => {
                    next = redirect;
                    cause = None;
                }
                None => return Ok(()),
            }
        }

        error!("Redirect loop starting from '{origin}'");
        Err(DispatchError::RedirectLoop {
            from: origin,
            hops: MAX_REDIRECTS,
        })
    }
}
