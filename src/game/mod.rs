//! The memorize-and-repeat game.
//!
//! Two players take turns replaying a shared, ever-growing sequence of
//! button symbols. A player who misses hands the other a chance to steal
//! the point. The game ends when one player leads by the configured margin.
//!
//! | # | State | Leaves on |
//! |---|---|---|
//! | 0 | `PlayerOneTurn` | any press -> 1; margin reached -> 8 |
//! | 1 | `PlayerOneReplay` | success -> 4; miss -> 2 |
//! | 2 | `PlayerTwoStealPrompt` | button 1 or 2 -> 3 |
//! | 3 | `PlayerTwoSteal` | success or miss -> 4 |
//! | 4 | `PlayerTwoTurn` | any press -> 5; margin reached -> 8 |
//! | 5 | `PlayerTwoReplay` | success -> 0; miss -> 6 |
//! | 6 | `PlayerOneStealPrompt` | nothing, unless wired by config |
//! | 7 | `PlayerOneSteal` | success or miss -> 0 |
//! | 8 | `GameOver` | final |

mod machine;
mod player;
mod replay;
mod rules;
mod sequence;
mod state;

pub use machine::GameStateMachine;
pub use player::PlayerScore;
pub use replay::{Replay, ReplayOutcome};
pub use rules::{catch_up, decide, leader, Seat};
pub use sequence::{Sequence, MAX_SYMBOL, MIN_SYMBOL};
pub use state::GameState;
