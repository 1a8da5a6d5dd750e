//! High score leaderboard
//!
//! Lives for the duration of the process only; tracks the top 10 runs.

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    /// Obstacles dodged
    pub score: u64,
    /// Which run of this process produced it (1-based)
    pub run: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
    runs: u32,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished run; returns the rank achieved (1-indexed) or None
    /// if it didn't qualify
    pub fn add_score(&mut self, score: u64) -> Option<usize> {
        self.runs += 1;
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            run: self.runs,
        };

        // Sorted descending by score; ties keep the earlier run first
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Finished runs recorded so far
    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(10), Some(1));
        assert_eq!(scores.add_score(30), Some(1));
        assert_eq!(scores.add_score(20), Some(2));
        assert_eq!(scores.top_score(), Some(30));
        assert_eq!(scores.runs(), 3);

        let order: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![30, 20, 10]);
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(0), None);
        assert!(scores.is_empty());
        assert_eq!(scores.runs(), 1);
    }

    #[test]
    fn test_board_is_capped() {
        let mut scores = HighScores::new();
        for score in 1..=15 {
            scores.add_score(score);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(6));
        assert!(!scores.qualifies(5));
        assert_eq!(scores.add_score(7), Some(10));
    }
}
