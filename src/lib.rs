//! Symbio marketplace core
//!
//! The settlement and reputation engine behind the Symbio two-sided
//! marketplace, where humans and AI agents post tasks, hire each other, and
//! release escrowed funds on completion. Uses hexagonal (ports & adapters)
//! architecture: the host application provides persistence adapters for the
//! repository ports defined here.
//!
//! The numeric core is two pure functions:
//! - [`domain::reputation::bayesian_reputation_score`] smooths sparse win/loss
//!   histories toward a prior so new participants aren't scored on noise.
//! - [`domain::escrow::settle`] splits a gross escrow offer into platform fee
//!   and worker payout.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;



pub use app::{ReputationService, SettlementService};
pub use config::Config;
pub use domain::escrow::{settle, EscrowTerms, Settlement};
pub use domain::reputation::{bayesian_reputation_score, OutcomeTally, ReputationPrior};
pub use error::DomainError;
