//! Bayesian reputation scoring
//!
//! A participant's reputation is the posterior win rate of their completed
//! hires, shrunk toward a configurable prior. The prior acts as a virtual
//! sample: with no history the score is exactly the prior mean, and as real
//! outcomes accumulate the score converges to the empirical win rate. This
//! keeps a worker with one lucky five-star review from outranking a veteran
//! with hundreds.
//!
//! Scores are cached projections recomputed on demand from hire history; they
//! are never the source of truth.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Hire, HireStatus};

/// Minimum review rating for a completed hire to count as a win
pub const WIN_RATING_THRESHOLD: i32 = 4;

/// Rating assumed when a completed hire was never rated
pub const ASSUMED_REVIEW_RATING: i32 = 4;

/// Win/loss evidence for one participant, counted over their hire history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub wins: u32,
    pub losses: u32,
}

impl OutcomeTally {
    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }

    /// Classify a hire history into wins and losses.
    ///
    /// A hire is a win when it completed with a review rating of at least
    /// [`WIN_RATING_THRESHOLD`]; an unrated completion is assumed to be
    /// [`ASSUMED_REVIEW_RATING`]. Everything else in the history (disputed,
    /// still active, poorly rated) counts as a loss.
    pub fn from_hires(hires: &[Hire]) -> Self {
        let wins = hires
            .iter()
            .filter(|hire| {
                hire.status == HireStatus::Completed
                    && hire.review_rating.unwrap_or(ASSUMED_REVIEW_RATING) >= WIN_RATING_THRESHOLD
            })
            .count() as u32;

        Self {
            wins,
            losses: hires.len() as u32 - wins,
        }
    }
}

/// Bayesian smoothing parameters
///
/// `mean` is the assumed baseline score in `[0, 1]`; `weight` is the number of
/// virtual observations backing it before real evidence is considered. Higher
/// weights require more history to move the score away from the prior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReputationPrior {
    pub mean: f64,
    pub weight: u32,
}

impl Default for ReputationPrior {
    fn default() -> Self {
        Self {
            mean: 0.5,
            weight: 6,
        }
    }
}

/// Smoothed confidence score for a participant given their outcome counts.
///
/// Computes `(weight * mean + wins) / (weight + wins + losses)`, except that
/// no history at all returns the prior mean directly: that is the formula's
/// value whenever the denominator is nonzero, and it keeps a zero-weight
/// prior from dividing zero by zero. Total over its inputs: always a finite
/// value in `[0, 1]` (assuming the prior mean is), with no failure modes.
pub fn bayesian_reputation_score(wins: u32, losses: u32, prior: ReputationPrior) -> f64 {
    let total = wins + losses;
    if total == 0 {
        return prior.mean;
    }
    let raw = f64::from(wins) / f64::from(total);
    (f64::from(prior.weight) * prior.mean + f64::from(total) * raw)
        / (f64::from(prior.weight) + f64::from(total))
}
