//! Top-3 score list
//!
//! Process-memory only; scores do not survive a restart. The board is
//! created in `main` and lent to the menu (display) and recorded into after
//! every session, instead of living in hidden global state.

/// Number of scores the board retains
pub const SCORE_SLOTS: usize = 3;

/// Session score leaderboard, always exactly [`SCORE_SLOTS`] entries in
/// descending order. Empty slots hold zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    scores: Vec<u32>,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard {
    /// Create a board with all slots zeroed.
    pub fn new() -> Self {
        Self {
            scores: vec![0; SCORE_SLOTS],
        }
    }

    /// Check whether a score makes the board. A tie with the current
    /// minimum does not qualify.
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.min()
    }

    /// Record a session's final score. Qualifying scores displace the
    /// current minimum; the board stays sorted descending and truncated to
    /// [`SCORE_SLOTS`]. Returns true if the score was retained.
    pub fn record(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.scores.push(score);
        self.scores.sort_unstable_by(|a, b| b.cmp(a));
        self.scores.truncate(SCORE_SLOTS);
        true
    }

    /// The retained scores, highest first.
    pub fn top(&self) -> &[u32] {
        &self.scores
    }

    fn min(&self) -> u32 {
        self.scores.iter().copied().min().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_with(scores: [u32; 3]) -> ScoreBoard {
        let mut board = ScoreBoard::new();
        for s in scores {
            board.record(s);
        }
        board
    }

    #[test]
    fn test_below_minimum_not_recorded() {
        let mut board = board_with([10, 8, 6]);
        assert!(!board.record(5));
        assert_eq!(board.top(), &[10, 8, 6]);
    }

    #[test]
    fn test_qualifying_score_displaces_minimum() {
        let mut board = board_with([10, 8, 6]);
        assert!(board.record(12));
        assert_eq!(board.top(), &[12, 10, 8]);
    }

    #[test]
    fn test_tie_with_minimum_does_not_qualify() {
        let board = board_with([10, 8, 6]);
        assert!(!board.qualifies(6));
        assert!(board.qualifies(7));
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut board = ScoreBoard::new();
        assert!(!board.record(0));
        assert_eq!(board.top(), &[0, 0, 0]);
    }

    #[test]
    fn test_fills_empty_slots() {
        let mut board = ScoreBoard::new();
        board.record(4);
        board.record(9);
        assert_eq!(board.top(), &[9, 4, 0]);
    }

    proptest! {
        #[test]
        fn board_shape_invariant(scores in proptest::collection::vec(0u32..1000, 0..40)) {
            let mut board = ScoreBoard::new();
            for score in scores {
                let min_before = board.top().iter().copied().min().unwrap();
                let recorded = board.record(score);
                // Retained scores beat the then-current minimum, strictly
                prop_assert_eq!(recorded, score > min_before);

                let top = board.top();
                prop_assert_eq!(top.len(), SCORE_SLOTS);
                prop_assert!(top.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }
}
