//! Wallet domain entity
//!
//! Every participant has a wallet. Escrow releases credit the worker's fiat
//! balance and leave an audit trail as wallet transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Party;

/// Unique identifier for a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletId(pub Uuid);

impl WalletId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WalletId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WalletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a wallet transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletTransactionId(pub Uuid);

impl WalletTransactionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WalletTransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WalletTransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant's balance record
#[derive(Debug, Clone, Serialize)]
pub struct Wallet {
    pub id: WalletId,
    pub owner: Party,
    pub fiat_balance: f64,
}

/// Direction of a wallet transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionDirection {
    Credit,
    Debit,
}

/// Payment rail a transaction moved over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Fiat,
    Crypto,
}

/// Data needed to record a wallet transaction
#[derive(Debug, Clone)]
pub struct NewWalletTransaction {
    pub wallet_id: WalletId,
    pub amount: f64,
    pub direction: TransactionDirection,
    pub method: PaymentMethod,
    /// Free-form pointer to what caused the movement, e.g. `hire-<id>`
    pub reference: String,
}

/// A recorded balance movement
#[derive(Debug, Clone, Serialize)]
pub struct WalletTransaction {
    pub id: WalletTransactionId,
    pub wallet_id: WalletId,
    pub amount: f64,
    pub direction: TransactionDirection,
    pub method: PaymentMethod,
    pub reference: String,
    pub created_at: DateTime<Utc>,
}
