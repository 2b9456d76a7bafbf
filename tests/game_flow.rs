//! Whole games driven through the dispatcher with a scripted panel.

use memory_duel::config::GameConfig;
use memory_duel::core::State;
use memory_duel::dispatch::{Dispatcher, Event, Tick};
use memory_duel::game::{GameState, GameStateMachine, Seat, Sequence};
use memory_duel::hardware::{ButtonId, ButtonStates, ScriptedPanel};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

type Game = Dispatcher<GameStateMachine, ScriptedPanel>;

fn game(seed: u64) -> Game {
    GameStateMachine::seeded(GameConfig::default(), seed).into_dispatcher(ScriptedPanel::new())
}

fn wired_game(seed: u64) -> Game {
    let config = GameConfig {
        wire_player_one_steal: true,
        ..GameConfig::default()
    };
    GameStateMachine::seeded(config, seed).into_dispatcher(ScriptedPanel::new())
}

/// A button that is not the one for `symbol`.
fn wrong_for(symbol: u8) -> ButtonId {
    ButtonId::from_symbol(symbol % 4 + 1).unwrap()
}

/// Clear whatever press the dispatcher last saw, then press `button`.
/// Takes two ticks; returns the second.
fn press(game: &mut Game, button: ButtonId) -> Tick<GameState> {
    game.hardware_mut().idle().press(button);
    let first = game.tick().unwrap();
    assert!(
        matches!(first, Tick::Idle | Tick::Ignored(Event::Release(_))),
        "unexpected {first:?}"
    );
    game.tick().unwrap()
}

fn replay(game: &mut Game, target: usize) -> Tick<GameState> {
    let symbols = game.handler().sequence().symbols()[..target].to_vec();
    game.hardware_mut().press_symbols(&symbols);
    game.tick().unwrap()
}

fn miss(game: &mut Game) -> Tick<GameState> {
    let first = game.handler().sequence().symbols()[0];
    game.hardware_mut().press(wrong_for(first));
    game.tick().unwrap()
}

#[test]
fn opening_round_scores_for_player_one() {
    let mut game = game(3);
    game.start().unwrap();
    assert_eq!(game.current_state(), &GameState::PlayerOneTurn);

    assert_eq!(
        press(&mut game, ButtonId::Four),
        Tick::Transitioned {
            event: Event::Press(ButtonId::Four),
            state: GameState::PlayerOneReplay,
        }
    );
    assert_eq!(game.handler().sequence().len(), 2);

    assert_eq!(replay(&mut game, 2), Tick::Redirected(GameState::PlayerTwoTurn));

    let machine = game.handler();
    assert_eq!(machine.player1().score(), 1);
    assert_eq!(machine.player2().score(), 0);
    assert_eq!(machine.target_length(Seat::PlayerOne), 3);
    assert_eq!(machine.target_length(Seat::PlayerTwo), 2);
    assert_eq!(machine.cursor(), 2);
}

#[test]
fn steal_then_round_win_ends_the_game() {
    let mut game = game(11);

    press(&mut game, ButtonId::One);
    assert_eq!(miss(&mut game), Tick::Redirected(GameState::PlayerTwoStealPrompt));

    assert_eq!(
        press(&mut game, ButtonId::Two),
        Tick::Transitioned {
            event: Event::Press(ButtonId::Two),
            state: GameState::PlayerTwoSteal,
        }
    );
    assert_eq!(replay(&mut game, 2), Tick::Redirected(GameState::PlayerTwoTurn));
    assert_eq!(game.handler().player2().score(), 1);
    // A steal does not grow anybody's length.
    assert_eq!(game.handler().target_length(Seat::PlayerOne), 2);

    press(&mut game, ButtonId::Three);
    assert_eq!(game.current_state(), &GameState::PlayerTwoReplay);
    assert_eq!(replay(&mut game, 2), Tick::Redirected(GameState::GameOver));
    assert!(game.is_final());

    game.tick().unwrap();
    assert_eq!(game.hardware().last_text(), Some("P2 WINS!"));

    let path: Vec<GameState> = game.history().get_path().into_iter().copied().collect();
    assert_eq!(
        path,
        vec![
            GameState::PlayerOneTurn,
            GameState::PlayerOneReplay,
            GameState::PlayerTwoStealPrompt,
            GameState::PlayerTwoSteal,
            GameState::PlayerTwoTurn,
            GameState::PlayerTwoReplay,
            GameState::PlayerOneTurn,
            GameState::GameOver,
        ]
    );
    // The last hop was the entry win check, not a table rule.
    assert!(game.history().transitions().last().unwrap().is_redirect());
}

#[test]
fn failed_steal_hands_the_turn_to_player_two() {
    let mut game = game(5);

    press(&mut game, ButtonId::One);
    miss(&mut game);
    press(&mut game, ButtonId::One);
    assert_eq!(game.current_state(), &GameState::PlayerTwoSteal);

    assert_eq!(miss(&mut game), Tick::Redirected(GameState::PlayerTwoTurn));
    assert_eq!(game.handler().player1().score(), 0);
    assert_eq!(game.handler().player2().score(), 0);
}

#[test]
fn only_buttons_one_and_two_accept_a_steal() {
    let mut game = game(8);

    press(&mut game, ButtonId::One);
    miss(&mut game);

    game.hardware_mut().idle().press(ButtonId::Four);
    game.tick().unwrap();
    assert_eq!(
        game.tick().unwrap(),
        Tick::Ignored(Event::Press(ButtonId::Four))
    );
    assert_eq!(game.current_state(), &GameState::PlayerTwoStealPrompt);
}

/// A steal button (1 or 2) that is wrong for `symbol`.
fn wrong_steal_button(symbol: u8) -> ButtonId {
    if symbol == 1 {
        ButtonId::Two
    } else {
        ButtonId::One
    }
}

#[test]
fn miss_held_into_the_steal_prompt_does_not_steal() {
    let mut game = game(13);
    game.hardware_mut().press(ButtonId::Three);
    game.tick().unwrap();
    assert_eq!(game.current_state(), &GameState::PlayerOneReplay);

    // Player one's wrong press is still held on the next poll.
    let held = wrong_steal_button(game.handler().sequence().symbols()[0]);
    let frame = ButtonStates::only(held);
    game.hardware_mut().frame(frame).frame(frame);

    assert_eq!(game.tick().unwrap(), Tick::Redirected(GameState::PlayerTwoStealPrompt));
    assert_eq!(game.tick().unwrap(), Tick::Ignored(Event::Release(held)));
    assert_eq!(game.current_state(), &GameState::PlayerTwoStealPrompt);
    assert_eq!(game.history().visits(&GameState::PlayerTwoSteal), 0);

    // A fresh press from player two still steals.
    assert_eq!(
        press(&mut game, held),
        Tick::Transitioned {
            event: Event::Press(held),
            state: GameState::PlayerTwoSteal,
        }
    );
}

#[test]
fn miss_held_into_a_turn_does_not_start_the_round() {
    let mut game = game(17);
    press(&mut game, ButtonId::One);
    miss(&mut game);
    press(&mut game, ButtonId::Two);
    assert_eq!(game.current_state(), &GameState::PlayerTwoSteal);

    let held = wrong_for(game.handler().sequence().symbols()[0]);
    let frame = ButtonStates::only(held);
    game.hardware_mut().frame(frame).frame(frame).frame(frame);

    assert_eq!(game.tick().unwrap(), Tick::Redirected(GameState::PlayerTwoTurn));
    assert_eq!(game.tick().unwrap(), Tick::Idle);
    assert_eq!(game.tick().unwrap(), Tick::Ignored(Event::Release(held)));
    assert_eq!(game.current_state(), &GameState::PlayerTwoTurn);
}

#[test]
fn player_one_steal_prompt_is_a_dead_end_by_default() {
    let mut game = game(21);

    press(&mut game, ButtonId::One);
    replay(&mut game, 2);
    press(&mut game, ButtonId::One);
    assert_eq!(miss(&mut game), Tick::Redirected(GameState::PlayerOneStealPrompt));

    for button in ButtonId::ALL {
        press(&mut game, button);
        assert_eq!(game.current_state(), &GameState::PlayerOneStealPrompt);
    }
    assert_eq!(game.history().visits(&GameState::PlayerOneSteal), 0);
}

#[test]
fn wired_player_one_steal_can_win_the_game() {
    let mut game = wired_game(21);

    press(&mut game, ButtonId::One);
    replay(&mut game, 2);
    press(&mut game, ButtonId::One);
    miss(&mut game);
    assert_eq!(game.current_state(), &GameState::PlayerOneStealPrompt);

    assert_eq!(
        press(&mut game, ButtonId::One),
        Tick::Transitioned {
            event: Event::Press(ButtonId::One),
            state: GameState::PlayerOneSteal,
        }
    );
    // Player one steals with player two's length and reaches a 2-0 lead.
    let target = game.handler().target_length(Seat::PlayerTwo);
    assert_eq!(target, 2);
    assert_eq!(replay(&mut game, target), Tick::Redirected(GameState::GameOver));
    assert_eq!(game.handler().winner(), Some(Seat::PlayerOne));
}

#[test]
fn mashing_every_button_counts_as_the_expected_one() {
    let mut game = game(0);
    press(&mut game, ButtonId::One);

    let all = ButtonStates::new([true; 4]);
    game.hardware_mut().frame(all).frame(all);
    game.tick().unwrap();

    assert_eq!(game.current_state(), &GameState::PlayerTwoTurn);
    assert_eq!(game.handler().player1().score(), 1);
}

#[test]
fn a_held_button_is_read_again_on_every_poll() {
    let mut game = game(0);
    press(&mut game, ButtonId::One);

    let symbols = game.handler().sequence().symbols().to_vec();
    let first = ButtonId::from_symbol(symbols[0]).unwrap();
    game.hardware_mut().press(first).press(first);
    game.tick().unwrap();

    let expected = if symbols[1] == symbols[0] {
        GameState::PlayerTwoTurn
    } else {
        GameState::PlayerTwoStealPrompt
    };
    assert_eq!(game.current_state(), &expected);
}

#[test]
fn run_plays_a_scripted_game_to_the_end() {
    let seed = 99;
    let mut preview = Sequence::new();
    preview.extend_to(2, &mut StdRng::seed_from_u64(seed));
    let symbols = preview.symbols().to_vec();

    let mut game = game(seed);
    let panel = game.hardware_mut();
    panel
        .press(ButtonId::One)
        .press(wrong_for(symbols[0]))
        .idle()
        .press(ButtonId::Two)
        .press_symbols(&symbols)
        .idle()
        .press(ButtonId::Three)
        .press_symbols(&symbols);

    let final_state = *game.run(Duration::ZERO).unwrap();

    assert_eq!(final_state, GameState::GameOver);
    assert!(final_state.is_final());
    assert_eq!(game.handler().sequence(), &preview);
    assert_eq!(game.handler().player2().score(), 2);
    assert_eq!(game.hardware().last_text(), Some("P2 WINS!"));
    assert_eq!(game.hardware().beeps(), vec![250, 250]);
}
