//! Computer difficulty tiers.

use std::fmt;
use std::str::FromStr;

/// Difficulty levels, fixed for a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Moderate,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Moderate)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
        }
    }

    /// Number key (1-based) that picks this tier on the selection screen.
    pub fn hotkey(&self) -> char {
        match self {
            Self::Easy => '1',
            Self::Moderate => '2',
            Self::Hard => '3',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.hotkey() == c)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Self::Easy),
            "moderate" | "2" => Ok(Self::Moderate),
            "hard" | "3" => Ok(Self::Hard),
            other => Err(format!(
                "unknown difficulty '{}' (expected easy, moderate or hard)",
                other
            )),
        }
    }
}
