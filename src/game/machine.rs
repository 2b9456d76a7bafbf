//! The game's state handler: per-state entry, do and exit behavior.

use super::player::PlayerScore;
use super::replay::{Replay, ReplayOutcome};
use super::rules::{catch_up, decide, leader, Seat};
use super::sequence::Sequence;
use super::state::GameState;
use crate::config::GameConfig;
use crate::dispatch::{Dispatcher, Event, StateHandler, TransitionRule};
use crate::hardware::{ButtonId, Hardware};
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How a replay state plays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Round {
    /// Who is replaying and scores on success.
    player: Seat,
    /// Whose target length sets the number of symbols.
    length_of: Seat,
    /// Whether success grows that target length.
    grows: bool,
    on_success: GameState,
    on_failure: GameState,
}

impl Round {
    fn for_state(state: GameState) -> Option<Self> {
        let round = match state {
            GameState::PlayerOneReplay => Round {
                player: Seat::PlayerOne,
                length_of: Seat::PlayerOne,
                grows: true,
                on_success: GameState::PlayerTwoTurn,
                on_failure: GameState::PlayerTwoStealPrompt,
            },
            GameState::PlayerTwoSteal => Round {
                player: Seat::PlayerTwo,
                length_of: Seat::PlayerOne,
                grows: false,
                on_success: GameState::PlayerTwoTurn,
                on_failure: GameState::PlayerTwoTurn,
            },
            GameState::PlayerTwoReplay => Round {
                player: Seat::PlayerTwo,
                length_of: Seat::PlayerTwo,
                grows: true,
                on_success: GameState::PlayerOneTurn,
                on_failure: GameState::PlayerOneStealPrompt,
            },
            GameState::PlayerOneSteal => Round {
                player: Seat::PlayerOne,
                length_of: Seat::PlayerTwo,
                grows: false,
                on_success: GameState::PlayerOneTurn,
                on_failure: GameState::PlayerOneTurn,
            },
            _ => return None,
        };
        Some(round)
    }
}

/// All game state for one session, plus the behavior of every state.
///
/// The machine does not know which state it is in; the [`Dispatcher`]
/// holds that and calls the [`StateHandler`] hooks.
pub struct GameStateMachine<R = StdRng> {
    config: GameConfig,
    player1: PlayerScore,
    player2: PlayerScore,
    sequence: Sequence,
    target_a: usize,
    target_b: usize,
    replay: Replay,
    rng: R,
}

impl GameStateMachine<StdRng> {
    /// New session with an entropy-seeded generator.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// New session with a reproducible sequence.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameStateMachine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let initial = config.initial_target_length;
        Self {
            player1: PlayerScore::new(config.player_one.clone()),
            player2: PlayerScore::new(config.player_two.clone()),
            sequence: Sequence::new(),
            target_a: initial,
            target_b: initial,
            replay: Replay::new(0),
            rng,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player1(&self) -> &PlayerScore {
        &self.player1
    }

    pub fn player2(&self) -> &PlayerScore {
        &self.player2
    }

    pub fn player(&self, seat: Seat) -> &PlayerScore {
        match seat {
            Seat::PlayerOne => &self.player1,
            Seat::PlayerTwo => &self.player2,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Target length owned by `seat` (A for player one, B for player two).
    pub fn target_length(&self, seat: Seat) -> usize {
        match seat {
            Seat::PlayerOne => self.target_a,
            Seat::PlayerTwo => self.target_b,
        }
    }

    /// Position reached in the current or most recent replay.
    pub fn cursor(&self) -> usize {
        self.replay.cursor()
    }

    /// The winner, once the score gap equals the configured margin.
    pub fn winner(&self) -> Option<Seat> {
        decide(
            self.player1.score(),
            self.player2.score(),
            self.config.win_margin,
        )
    }

    /// Text shown in the terminal state.
    pub fn announcement(&self) -> String {
        let seat = leader(self.player1.score(), self.player2.score());
        format!("{} WINS!", self.player(seat).name())
    }

    /// Table-driven transitions; everything else is a hook redirect.
    pub fn transition_rules(&self) -> Vec<TransitionRule<GameState>> {
        let steal = vec![Event::Press(ButtonId::One), Event::Press(ButtonId::Two)];
        let mut rules = vec![
            TransitionRule {
                from: GameState::PlayerOneTurn,
                events: Event::ANY_PRESS.to_vec(),
                to: GameState::PlayerOneReplay,
            },
            TransitionRule {
                from: GameState::PlayerTwoTurn,
                events: Event::ANY_PRESS.to_vec(),
                to: GameState::PlayerTwoReplay,
            },
            TransitionRule {
                from: GameState::PlayerTwoStealPrompt,
                events: steal.clone(),
                to: GameState::PlayerTwoSteal,
            },
        ];
        if self.config.wire_player_one_steal {
            rules.push(TransitionRule {
                from: GameState::PlayerOneStealPrompt,
                events: steal,
                to: GameState::PlayerOneSteal,
            });
        }
        rules
    }

    /// Wrap the machine in a dispatcher starting at player one's turn, with
    /// the transition table installed.
    pub fn into_dispatcher<H: Hardware>(self, hardware: H) -> Dispatcher<Self, H> {
        let rules = self.transition_rules();
        let mut dispatcher = Dispatcher::new(GameState::PlayerOneTurn, self, hardware);
        for rule in rules {
            dispatcher.add_rule(rule);
        }
        dispatcher
    }

    fn player_mut(&mut self, seat: Seat) -> &mut PlayerScore {
        match seat {
            Seat::PlayerOne => &mut self.player1,
            Seat::PlayerTwo => &mut self.player2,
        }
    }

    fn target_mut(&mut self, seat: Seat) -> &mut usize {
        match seat {
            Seat::PlayerOne => &mut self.target_a,
            Seat::PlayerTwo => &mut self.target_b,
        }
    }

    fn scores_tied(&self) -> bool {
        self.player1.score() == self.player2.score()
    }

    fn scoreline(&self) -> String {
        format!("{} {}", self.player1, self.player2)
    }

    fn check_winner(&self) -> Option<GameState> {
        self.winner().map(|_| GameState::GameOver)
    }

    /// Entry action for the two regular replay states: settle the target
    /// length, grow the sequence to it, and play the sequence back.
    fn begin_round<H: Hardware>(&mut self, seat: Seat, hardware: &mut H) {
        let tied = self.scores_tied();
        match seat {
            Seat::PlayerOne => {
                self.target_a = catch_up(self.target_a, self.target_b, tied);
            }
            Seat::PlayerTwo => {
                // Player two's first round keeps the initial length.
                if self.target_b > self.config.initial_target_length {
                    self.target_b = catch_up(self.target_b, self.target_a, tied);
                }
            }
        }

        let target = self.target_length(seat);
        let added = self.sequence.extend_to(target, &mut self.rng);
        debug!(
            "Sequence for {} ({added} new): {:?}",
            self.player(seat).name(),
            self.sequence.symbols()
        );

        hardware.show_text(&format!("Watch {target} blinks"));
        self.play_sequence(hardware);
    }

    fn play_sequence<H: Hardware>(&self, hardware: &mut H) {
        for (position, &symbol) in self.sequence.symbols().iter().enumerate() {
            match ButtonId::from_symbol(symbol) {
                Some(light) => hardware.blink(light),
                None => error!("Invalid symbol {symbol} at position {position}"),
            }
        }
    }

    /// Block until the replay succeeds or fails.
    fn run_replay<H: Hardware>(&mut self, target: usize, hardware: &mut H) -> ReplayOutcome {
        self.replay = Replay::new(target);
        loop {
            let states = hardware.read_buttons();
            match self
                .replay
                .poll(&self.sequence, states, |light| hardware.blink(light))
            {
                ReplayOutcome::Waiting => continue,
                outcome => return outcome,
            }
        }
    }

    fn play_round<H: Hardware>(&mut self, round: Round, hardware: &mut H) -> GameState {
        let target = self.target_length(round.length_of);
        hardware.reset_display();
        hardware.show_text(&format!("{target} to go\n{}", self.scoreline()));

        if self.run_replay(target, hardware) == ReplayOutcome::Success {
            self.player_mut(round.player).increment();
            if round.grows {
                *self.target_mut(round.length_of) += 1;
            }
            info!(
                "{} replayed {target} symbols, score {}",
                self.player(round.player).name(),
                self.scoreline()
            );
            hardware.show_text("Sweet, you win");
            hardware.beep(self.config.win_tone_hz);
            round.on_success
        } else {
            info!(
                "{} missed at symbol {} of {target}",
                self.player(round.player).name(),
                self.replay.cursor() + 1
            );
            round.on_failure
        }
    }

    fn steal_prompt<H: Hardware>(&self, stealer: Seat, hardware: &mut H) {
        hardware.show_text(&format!(
            "{}: steal the point?\nPress 1 or 2",
            self.player(stealer).name()
        ));
    }

    #[cfg(test)]
    pub(crate) fn set_scores(&mut self, score1: u32, score2: u32) {
        self.player1 = PlayerScore::with_score(self.config.player_one.clone(), score1);
        self.player2 = PlayerScore::with_score(self.config.player_two.clone(), score2);
    }

    #[cfg(test)]
    pub(crate) fn set_targets(&mut self, target_a: usize, target_b: usize) {
        self.target_a = target_a;
        self.target_b = target_b;
    }

    #[cfg(test)]
    pub(crate) fn set_sequence(&mut self, symbols: Vec<u8>) {
        self.sequence = Sequence::from_symbols(symbols);
    }
}

impl<R: Rng, H: Hardware> StateHandler<H> for GameStateMachine<R> {
    type State = GameState;

    fn state_entered(
        &mut self,
        state: &GameState,
        _event: Option<Event>,
        hardware: &mut H,
    ) -> Option<GameState> {
        match state {
            GameState::PlayerOneTurn => self.check_winner(),
            GameState::PlayerOneReplay => {
                self.begin_round(Seat::PlayerOne, hardware);
                None
            }
            GameState::PlayerTwoStealPrompt => {
                info!("{} may steal", self.player2.name());
                None
            }
            GameState::PlayerTwoTurn => {
                hardware.reset_display();
                self.check_winner()
            }
            GameState::PlayerTwoReplay => {
                self.begin_round(Seat::PlayerTwo, hardware);
                None
            }
            GameState::GameOver => {
                info!("Game over: {} ({})", self.announcement(), self.scoreline());
                None
            }
            GameState::PlayerTwoSteal
            | GameState::PlayerOneStealPrompt
            | GameState::PlayerOneSteal => None,
        }
    }

    fn state_do(&mut self, state: &GameState, hardware: &mut H) -> Option<GameState> {
        match state {
            GameState::PlayerOneTurn | GameState::PlayerTwoTurn => {
                if let Some(over) = self.check_winner() {
                    return Some(over);
                }
                let seat = if *state == GameState::PlayerOneTurn {
                    Seat::PlayerOne
                } else {
                    Seat::PlayerTwo
                };
                hardware.show_text(&format!(
                    "{} your turn\n{}",
                    self.player(seat).name(),
                    self.scoreline()
                ));
                None
            }
            GameState::PlayerOneReplay
            | GameState::PlayerTwoSteal
            | GameState::PlayerTwoReplay
            | GameState::PlayerOneSteal => {
                let round = Round::for_state(*state)?;
                Some(self.play_round(round, hardware))
            }
            GameState::PlayerTwoStealPrompt => {
                self.steal_prompt(Seat::PlayerTwo, hardware);
                None
            }
            GameState::PlayerOneStealPrompt => {
                self.steal_prompt(Seat::PlayerOne, hardware);
                None
            }
            GameState::GameOver => {
                hardware.show_text(&self.announcement());
                None
            }
        }
    }

    fn state_left(&mut self, state: &GameState, _event: Option<Event>, hardware: &mut H) {
        match state {
            GameState::PlayerOneTurn | GameState::PlayerTwoTurn => hardware.reset_display(),
            GameState::PlayerOneReplay
            | GameState::PlayerTwoStealPrompt
            | GameState::PlayerTwoSteal
            | GameState::PlayerTwoReplay
            | GameState::PlayerOneStealPrompt
            | GameState::PlayerOneSteal
            | GameState::GameOver => {}
        }
    }
}
