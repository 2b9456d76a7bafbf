//! Play Memory Duel in a terminal.
//!
//! Run with: cargo run -- [--config game.json] [--seed 42]

mod terminal;

use anyhow::Context;
use log::info;
use memory_duel::config::GameConfig;
use memory_duel::game::GameStateMachine;
use std::path::PathBuf;

const HELP: &str = "\
memory-duel: two-player memorize-and-repeat

USAGE:
  memory-duel [OPTIONS]

OPTIONS:
  --config PATH   JSON game configuration
  --seed N        Seed the sequence generator for a reproducible game
  -h, --help      Print this help

Type 1-4 and Enter to press a button.
";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let seed: Option<u64> = args.opt_value_from_str("--seed")?;
    let rest = args.finish();
    if !rest.is_empty() {
        anyhow::bail!("Unexpected arguments: {rest:?}");
    }

    let config = match config_path {
        Some(path) => GameConfig::from_path(&path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    info!(
        "{} vs {}, first to lead by {}",
        config.player_one, config.player_two, config.win_margin
    );

    let poll_interval = config.poll_interval();
    let panel = terminal::panel(config.blink_duration()).context("Building terminal panel")?;
    let machine = match seed {
        Some(seed) => GameStateMachine::seeded(config, seed),
        None => GameStateMachine::new(config),
    };

    let mut dispatcher = machine.into_dispatcher(panel);
    dispatcher.run(poll_interval)?;

    let game = dispatcher.handler();
    info!(
        "{} after {} transitions",
        game.announcement(),
        dispatcher.history().transitions().len()
    );
    Ok(())
}
