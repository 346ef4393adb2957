//! In-memory leaderboard.
//!
//! Entries are kept in insertion order and never sorted, so "top scores"
//! reads as a log of the sessions played in this process.

/// One finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    name: String,
    score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_score(&mut self, name: impl Into<String>, score: u32) {
        self.add_entry(LeaderboardEntry::new(name, score));
    }

    pub fn add_entry(&mut self, entry: LeaderboardEntry) {
        tracing::info!(
            name = entry.name(),
            score = entry.score(),
            entries = self.entries.len() + 1,
            "leaderboard entry added"
        );
        self.entries.push(entry);
    }

    /// Every entry, oldest first.
    pub fn top_scores(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_leaderboard() {
        let board = Leaderboard::new();
        assert!(board.is_empty());
        assert_eq!(board.top_scores().count(), 0);
    }

    #[test]
    fn test_insertion_order_not_rank() {
        let mut board = Leaderboard::new();
        board.add_score("Alice", 5);
        board.add_score("Bob", 7);

        let listed: Vec<(&str, u32)> = board.top_scores().map(|e| (e.name(), e.score())).collect();
        assert_eq!(listed, vec![("Alice", 5), ("Bob", 7)]);

        board.add_score("Carol", 1);
        assert_eq!(board.entries()[2].name(), "Carol");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut board = Leaderboard::new();
        board.add_score("Alice", 3);
        board.add_score("Alice", 3);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_empty_name_allowed() {
        let mut board = Leaderboard::new();
        board.add_entry(LeaderboardEntry::new("", 0));
        assert_eq!(board.entries()[0].name(), "");
    }
}
