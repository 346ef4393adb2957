//! Roshambo - terminal Rock-Paper-Scissors.
//!
//! The rules, choosers and session loop are UI-agnostic and exposed here for
//! testing; the terminal front end lives in `app` and `ui`.

pub mod app;
pub mod build_info;
pub mod core;
pub mod input;
pub mod leaderboard;
pub mod logging;
pub mod players;
pub mod ui;

pub use crate::core::{
    play_round, resolve, run_session, Difficulty, GamePhase, Move, Outcome, RoundReport, Session,
};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use players::{ComputerChooser, HumanChooser, MoveChooser, RoundStatus, ScriptedChooser};
