use std::env;

use crate::domain::escrow::DEFAULT_PLATFORM_FEE_BPS;
use crate::domain::reputation::ReputationPrior;

#[derive(Clone)]
pub struct Config {
    /// Platform fee in basis points taken from every escrow release
    pub platform_fee_bps: u32,
    /// Bayesian prior blended into every reputation score
    pub reputation_prior: ReputationPrior,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let default_prior = ReputationPrior::default();

        Self {
            platform_fee_bps: env::var("PLATFORM_FEE_BPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PLATFORM_FEE_BPS),
            reputation_prior: ReputationPrior {
                mean: env::var("REPUTATION_PRIOR_MEAN")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(default_prior.mean),
                weight: env::var("REPUTATION_PRIOR_WEIGHT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(default_prior.weight),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform_fee_bps: DEFAULT_PLATFORM_FEE_BPS,
            reputation_prior: ReputationPrior::default(),
        }
    }
}
