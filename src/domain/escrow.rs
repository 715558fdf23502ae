//! Escrow settlement arithmetic
//!
//! When a task owner approves delivered work, the hire's escrowed offer is
//! split into a platform fee and the worker's net payout. The split is the
//! whole computation: currency handling, rounding to integer cents, and
//! transactional bookkeeping all live with the caller, which also owns
//! validating that the fee rate is sane before invoking this.

use serde::{Deserialize, Serialize};

/// Basis points in a whole (10_000 bps = 100%)
pub const BPS_DENOMINATOR: f64 = 10_000.0;

/// Platform fee applied when no override is configured (8%)
pub const DEFAULT_PLATFORM_FEE_BPS: u32 = 800;

/// Terms of one escrow release: the gross offer and the platform's cut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EscrowTerms {
    pub gross_offer: f64,
    pub fee_bps: u32,
}

impl EscrowTerms {
    pub fn settle(&self) -> Settlement {
        settle(self.gross_offer, self.fee_bps)
    }
}

/// Result of splitting a gross offer: platform fee plus worker payout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub fee: f64,
    pub net: f64,
}

/// Split a gross offer into platform fee and net payout.
///
/// `fee = gross * bps / 10_000`, `net = max(0, gross - fee)`. The fee itself
/// is not clamped: a rate above 10_000 bps produces a fee larger than the
/// gross and a net of zero. Deterministic, no rounding beyond floating-point
/// arithmetic.
pub fn settle(gross_offer: f64, fee_bps: u32) -> Settlement {
    let fee = gross_offer * f64::from(fee_bps) / BPS_DENOMINATOR;
    let net = (gross_offer - fee).max(0.0);
    Settlement { fee, net }
}
