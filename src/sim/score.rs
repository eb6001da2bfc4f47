//! Match scoring and point history
//!
//! History is append-only for the lifetime of a match and is only cleared by a
//! full reset.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::clock::SimInstant;
use super::state::Side;

/// One point scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub scorer: Side,
    /// Left score after this point
    pub left_score: u32,
    /// Right score after this point
    pub right_score: u32,
    pub timestamp: SimInstant,
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scored! {}-{}",
            self.scorer, self.left_score, self.right_score
        )
    }
}

/// Both scores plus the point log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    left: u32,
    right: u32,
    history: Vec<ScoreEntry>,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// (left, right)
    pub fn scores(&self) -> (u32, u32) {
        (self.left, self.right)
    }

    /// Award a point and log it
    pub fn record(&mut self, scorer: Side, timestamp: SimInstant) -> ScoreEntry {
        match scorer {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
        let entry = ScoreEntry {
            scorer,
            left_score: self.left,
            right_score: self.right,
            timestamp,
        };
        self.history.push(entry);
        entry
    }

    /// Side that reached `winning_score`, if any
    pub fn winner(&self, winning_score: u32) -> Option<Side> {
        if self.left >= winning_score {
            Some(Side::Left)
        } else if self.right >= winning_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn history(&self) -> &[ScoreEntry] {
        &self.history
    }

    /// Last `n` entries, newest first
    pub fn recent(&self, n: usize) -> Vec<ScoreEntry> {
        self.history.iter().rev().take(n).copied().collect()
    }

    /// Zero both scores and clear the log
    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
        self.history.clear();
    }
}

/// Game-over banner text
pub fn winner_banner(winner: Side) -> String {
    format!("{winner} Player Wins!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_snapshot() {
        let mut scores = ScoreTracker::new();
        scores.record(Side::Left, SimInstant(10));
        let entry = scores.record(Side::Right, SimInstant(20));
        assert_eq!(
            entry,
            ScoreEntry {
                scorer: Side::Right,
                left_score: 1,
                right_score: 1,
                timestamp: SimInstant(20),
            }
        );
        assert_eq!(scores.history().len(), 2);
        assert_eq!(scores.scores(), (1, 1));
    }

    #[test]
    fn test_winner_threshold() {
        let mut scores = ScoreTracker::new();
        for _ in 0..4 {
            scores.record(Side::Left, SimInstant::ZERO);
        }
        assert_eq!(scores.winner(5), None);
        for _ in 0..5 {
            scores.record(Side::Right, SimInstant::ZERO);
        }
        assert_eq!(scores.winner(5), Some(Side::Right));
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut scores = ScoreTracker::new();
        for i in 0..7 {
            scores.record(if i % 2 == 0 { Side::Left } else { Side::Right }, SimInstant(i));
        }
        let recent = scores.recent(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].timestamp, SimInstant(6));
        assert_eq!(recent[4].timestamp, SimInstant(2));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut scores = ScoreTracker::new();
        scores.record(Side::Left, SimInstant(1));
        scores.reset();
        let once = scores.clone();
        scores.reset();
        assert_eq!(scores, once);
        assert_eq!(scores, ScoreTracker::new());
    }

    #[test]
    fn test_display_text() {
        let entry = ScoreEntry {
            scorer: Side::Left,
            left_score: 3,
            right_score: 2,
            timestamp: SimInstant::ZERO,
        };
        assert_eq!(entry.to_string(), "Left scored! 3-2");
        assert_eq!(winner_banner(Side::Right), "Right Player Wins!");
    }
}
