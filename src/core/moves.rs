//! Moves and round resolution.
//!
//! The three moves form a fixed beats-cycle: rock beats scissors,
//! scissors beats paper, paper beats rock.

use std::fmt;

/// A single hand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Fixed display and cursor order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            Self::Rock => 0,
            Self::Paper => 1,
            Self::Scissors => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    /// The one move this move defeats.
    pub fn beats(self) -> Move {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// The next move in list order, which is also the move that beats `self`.
    pub fn next(self) -> Move {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of resolving two moves, seen from the first mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AWins,
    BWins,
    Draw,
}

impl Outcome {
    /// The same result seen from the other side.
    pub fn flipped(self) -> Outcome {
        match self {
            Self::AWins => Self::BWins,
            Self::BWins => Self::AWins,
            Self::Draw => Self::Draw,
        }
    }
}

/// Resolve `a` against `b`.
pub fn resolve(a: Move, b: Move) -> Outcome {
    if a == b {
        Outcome::Draw
    } else if a.beats() == b {
        Outcome::AWins
    } else {
        Outcome::BWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_table() {
        assert_eq!(Move::Rock.beats(), Move::Scissors);
        assert_eq!(Move::Paper.beats(), Move::Rock);
        assert_eq!(Move::Scissors.beats(), Move::Paper);
    }

    #[test]
    fn test_resolve_same_move_is_draw() {
        for m in Move::ALL {
            assert_eq!(resolve(m, m), Outcome::Draw);
        }
    }

    #[test]
    fn test_resolve_is_anti_symmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(resolve(a, b), resolve(b, a).flipped(), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_resolve_known_pairs() {
        assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::AWins);
        assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::AWins);
        assert_eq!(resolve(Move::Scissors, Move::Paper), Outcome::AWins);
        assert_eq!(resolve(Move::Scissors, Move::Rock), Outcome::BWins);
        assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::BWins);
        assert_eq!(resolve(Move::Paper, Move::Scissors), Outcome::BWins);
    }

    #[test]
    fn test_every_move_beats_exactly_one() {
        for a in Move::ALL {
            let wins = Move::ALL
                .iter()
                .filter(|&&b| resolve(a, b) == Outcome::AWins)
                .count();
            let losses = Move::ALL
                .iter()
                .filter(|&&b| resolve(a, b) == Outcome::BWins)
                .count();
            assert_eq!(wins, 1);
            assert_eq!(losses, 1);
        }
    }

    #[test]
    fn test_next_beats_current() {
        for m in Move::ALL {
            assert_eq!(resolve(m.next(), m), Outcome::AWins);
        }
    }

    #[test]
    fn test_index_roundtrip_and_wrap() {
        for m in Move::ALL {
            assert_eq!(Move::from_index(m.index()), m);
        }
        assert_eq!(Move::from_index(3), Move::Rock);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Move::Rock.to_string(), "rock");
        assert_eq!(Move::Paper.to_string(), "paper");
        assert_eq!(Move::Scissors.to_string(), "scissors");
    }
}
