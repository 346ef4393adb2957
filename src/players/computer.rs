//! Computer opponent move policy.

use super::{MoveChooser, RoundStatus};
use crate::core::difficulty::Difficulty;
use crate::core::moves::Move;
use rand::Rng;
use std::io;

/// Pick a move for the given tier.
///
/// - Easy: always rock.
/// - Moderate: uniform over the three moves.
/// - Hard: uniform draw, then the move that beats the drawn one. The result
///   is still uniform, so against a uniformly random opponent it wins one
///   round in three like any other policy.
pub fn pick_move<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Move {
    match difficulty {
        Difficulty::Easy => Move::Rock,
        Difficulty::Moderate => Move::from_index(rng.gen_range(0..Move::ALL.len())),
        Difficulty::Hard => Move::from_index(rng.gen_range(0..Move::ALL.len())).next(),
    }
}

/// Policy-driven chooser: a fixed tier plus its own random source.
#[derive(Debug, Clone)]
pub struct ComputerChooser<R> {
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> ComputerChooser<R> {
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<R: Rng> MoveChooser for ComputerChooser<R> {
    fn choose_move(&mut self, _status: RoundStatus) -> io::Result<Move> {
        Ok(pick_move(self.difficulty, &mut self.rng))
    }
}
