//! Core game rules and session state.

pub mod constants;
pub mod difficulty;
pub mod game_loop;
pub mod moves;
pub mod session;

pub use constants::*;
pub use difficulty::Difficulty;
pub use game_loop::{play_round, run_session, verdict};
pub use moves::{resolve, Move, Outcome};
pub use session::{GamePhase, Player, RoundReport, Session};
