//! Score tiers and fixed selection policy
//!
//! Pure functions with no I/O; the engine combines them with the store.

use shared::{ScoreFilter, ScoreQuery};

/// Scores above this value belong to the top tier
pub const TIER_SCORE_THRESHOLD: i64 = 10;

/// Share of random picks drawn from the normal tier
pub const NORMAL_TIER_PROBABILITY: f64 = 0.7;

/// A recommendation is removed once its score drops below this value
pub const REMOVAL_SCORE_THRESHOLD: i64 = -5;

/// Score partition used by the random pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// score <= 10
    Normal,
    /// score > 10
    Top,
}

impl ScoreTier {
    /// Map a uniform draw in `[0, 1)` to a tier
    pub fn from_draw(draw: f64) -> Self {
        if draw < NORMAL_TIER_PROBABILITY {
            ScoreTier::Normal
        } else {
            ScoreTier::Top
        }
    }

    /// Store filter selecting this tier's candidates
    pub fn query(self) -> ScoreQuery {
        match self {
            ScoreTier::Normal => ScoreQuery::new(TIER_SCORE_THRESHOLD, ScoreFilter::Lte),
            ScoreTier::Top => ScoreQuery::new(TIER_SCORE_THRESHOLD, ScoreFilter::Gt),
        }
    }
}

/// Turn a uniform draw into an index into a pool of `len` items
///
/// Returns `None` for an empty pool. Out-of-range draws are clamped.
pub fn pick_index(draw: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = (draw * len as f64).floor();
    if index.is_nan() || index < 0.0 {
        return Some(0);
    }
    Some((index as usize).min(len - 1))
}

/// Whether a post-vote score means the recommendation must go
pub fn should_remove(score: i64) -> bool {
    score < REMOVAL_SCORE_THRESHOLD
}
