//! Scripted Game
//!
//! This example plays a full game against a scripted panel.
//!
//! Key concepts:
//! - Driving the dispatcher one tick at a time
//! - Feeding button frames to `ScriptedPanel`
//! - A miss handing the opponent a steal
//! - Reading the transition history afterwards
//!
//! Player one always misses and player two always repeats correctly, so
//! player two steals one point and wins the next round.
//!
//! Run with: cargo run --example scripted_game

use memory_duel::config::GameConfig;
use memory_duel::core::State;
use memory_duel::game::{GameState, GameStateMachine, Seat};
use memory_duel::hardware::{ButtonId, ScriptedPanel};

fn main() {
    println!("=== Scripted Memory Duel ===\n");

    let machine = GameStateMachine::seeded(GameConfig::default(), 2024);
    let mut game = machine.into_dispatcher(ScriptedPanel::new());
    game.start().unwrap();

    while !game.is_final() {
        let state = *game.current_state();
        let machine = game.handler();
        match state {
            GameState::PlayerOneReplay | GameState::PlayerOneSteal => {
                let first = machine.sequence().symbols()[0];
                let wrong = ButtonId::from_symbol(first % 4 + 1).unwrap();
                println!("  {} presses {} (wrong)", machine.player1().name(), wrong);
                game.hardware_mut().press(wrong);
            }
            GameState::PlayerTwoSteal | GameState::PlayerTwoReplay => {
                let owner = if state == GameState::PlayerTwoSteal {
                    Seat::PlayerOne
                } else {
                    Seat::PlayerTwo
                };
                let target = machine.target_length(owner);
                let symbols = machine.sequence().symbols()[..target].to_vec();
                println!("  {} repeats {:?}", machine.player2().name(), symbols);
                game.hardware_mut().press_symbols(&symbols);
            }
            _ => {
                game.hardware_mut().idle().press(ButtonId::One);
                game.tick().unwrap();
            }
        }

        let tick = game.tick().unwrap();
        println!("{:<22} -> {:?}", state.name(), tick);
    }

    // Show the announcement.
    game.tick().unwrap();

    println!("\nDisplay: {}", game.hardware().last_text().unwrap_or(""));
    println!("Score: {} {}", game.handler().player1(), game.handler().player2());

    println!("\nPath:");
    for state in game.history().get_path() {
        println!("  {}", state.name());
    }

    println!("\n=== Example Complete ===");
}
