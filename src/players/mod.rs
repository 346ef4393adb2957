//! Move choosers for both sides of a round.
//!
//! The human and computer opponents share one capability: produce a move
//! for the next round. Each implementation carries only the state it needs.

pub mod computer;
pub mod human;

pub use computer::{pick_move, ComputerChooser};
pub use human::{CursorInput, HumanChooser, MoveCursor};

use crate::core::moves::Move;
use std::io;

/// Values shown to the human while a move is being chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStatus {
    pub score: u32,
    pub lives: u32,
}

/// Anything that can supply a move for the next round.
pub trait MoveChooser {
    /// Choose a move. Only interactive choosers can fail, and only when the
    /// input source itself breaks.
    fn choose_move(&mut self, status: RoundStatus) -> io::Result<Move>;
}

/// Replays a fixed list of moves, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedChooser {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedChooser {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves, next: 0 }
    }

    pub fn always(m: Move) -> Self {
        Self::new(vec![m])
    }
}

impl MoveChooser for ScriptedChooser {
    fn choose_move(&mut self, _status: RoundStatus) -> io::Result<Move> {
        if self.moves.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted chooser has no moves",
            ));
        }
        let m = self.moves[self.next % self.moves.len()];
        self.next += 1;
        Ok(m)
    }
}
