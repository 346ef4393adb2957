//! Per-session game state.
//!
//! A `Session` is owned by the game loop for the duration of one game and
//! is the only place score and lives are mutated.

use super::constants::STARTING_LIVES;
use super::difficulty::Difficulty;
use super::moves::{resolve, Move, Outcome};
use crate::leaderboard::LeaderboardEntry;
use crate::players::RoundStatus;

/// The human side of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub lives: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lives: STARTING_LIVES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    GameOver,
}

/// Everything that happened in one round, for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub human_move: Move,
    pub computer_move: Move,
    /// From the human's point of view
    pub outcome: Outcome,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    pub difficulty: Difficulty,
    pub score: u32,
    pub rounds_played: u32,
    phase: GamePhase,
}

impl Session {
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            player: Player::new(name),
            difficulty,
            score: 0,
            rounds_played: 0,
            phase: GamePhase::InProgress,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    /// Values the human chooser renders while waiting for a move.
    pub fn status(&self) -> RoundStatus {
        RoundStatus {
            score: self.score,
            lives: self.player.lives,
        }
    }

    /// Resolve one round and update score and lives.
    /// Returns `None` once the session is over; a finished session never changes.
    pub fn apply_round(&mut self, human_move: Move, computer_move: Move) -> Option<RoundReport> {
        if self.is_over() {
            return None;
        }

        let outcome = resolve(human_move, computer_move);
        match outcome {
            Outcome::AWins => self.score += 1,
            Outcome::BWins => self.player.lives = self.player.lives.saturating_sub(1),
            Outcome::Draw => {}
        }
        self.rounds_played += 1;

        if self.player.lives == 0 {
            self.phase = GamePhase::GameOver;
        }

        Some(RoundReport {
            round: self.rounds_played,
            human_move,
            computer_move,
            outcome,
            score: self.score,
            lives: self.player.lives,
            phase: self.phase,
        })
    }

    /// Final record for the leaderboard.
    pub fn leaderboard_entry(&self) -> LeaderboardEntry {
        LeaderboardEntry::new(self.player.name.clone(), self.score)
    }
}
