//! Reputation recompute service
//!
//! Rebuilds a participant's reputation score from their full hire history and
//! persists it onto their profile. The stored score is a cached projection;
//! this recompute is the only writer. Who may trigger a recompute is an
//! authorization question the caller answers before invoking this.

use std::sync::Arc;

use crate::domain::entities::Party;
use crate::domain::ports::{HireRepository, ProfileRepository};
use crate::domain::reputation::{bayesian_reputation_score, OutcomeTally, ReputationPrior};
use crate::error::DomainError;

/// Result of recomputing one participant's reputation
#[derive(Debug, Clone)]
pub struct ReputationResult {
    pub party: Party,
    pub wins: u32,
    pub losses: u32,
    pub score: f64,
}

/// Service for recomputing reputation projections
pub struct ReputationService<HR, PR>
where
    HR: HireRepository,
    PR: ProfileRepository,
{
    hires: Arc<HR>,
    profiles: Arc<PR>,
    prior: ReputationPrior,
}

impl<HR, PR> ReputationService<HR, PR>
where
    HR: HireRepository,
    PR: ProfileRepository,
{
    pub fn new(hires: Arc<HR>, profiles: Arc<PR>, prior: ReputationPrior) -> Self {
        Self {
            hires,
            profiles,
            prior,
        }
    }

    /// Recompute a party's reputation from their hire history as worker and
    /// persist it onto their profile.
    pub async fn recompute(&self, party: Party) -> Result<ReputationResult, DomainError> {
        let hires = self.hires.find_by_worker(&party).await?;
        let tally = OutcomeTally::from_hires(&hires);
        let score = bayesian_reputation_score(tally.wins, tally.losses, self.prior);

        self.profiles.update_reputation(&party, score).await?;

        tracing::info!(
            party = %party,
            wins = tally.wins,
            losses = tally.losses,
            score = score,
            "Reputation recomputed"
        );

        Ok(ReputationResult {
            party,
            wins: tally.wins,
            losses: tally.losses,
            score,
        })
    }
}
