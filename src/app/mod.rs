//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the pure
//! scoring/settlement core.

pub mod reputation_service;
pub mod settlement_service;

pub use reputation_service::{ReputationResult, ReputationService};
pub use settlement_service::{SettlementResult, SettlementService};
