//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters in the host application
//! (e.g. Postgres); in-memory implementations back the test suite.

use async_trait::async_trait;

use crate::domain::entities::{
    Hire, HireId, HireStatus, NewWalletTransaction, Party, TaskId, TaskStatus, Wallet, WalletId,
    WalletTransaction,
};
use crate::error::DomainError;

/// Repository for Hire entities
#[async_trait]
pub trait HireRepository: Send + Sync {
    /// Find a hire by ID
    async fn find_by_id(&self, id: &HireId) -> Result<Option<Hire>, DomainError>;

    /// All hires where the given party is the worker, in any status
    async fn find_by_worker(&self, worker: &Party) -> Result<Vec<Hire>, DomainError>;

    /// Update a hire's lifecycle status
    async fn update_status(&self, id: &HireId, status: HireStatus) -> Result<(), DomainError>;
}

/// Repository for Task entities
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Update a task's lifecycle status
    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> Result<(), DomainError>;
}

/// Repository for Wallet entities
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// Find the wallet owned by a party
    async fn find_by_owner(&self, owner: &Party) -> Result<Option<Wallet>, DomainError>;

    /// Overwrite a wallet's fiat balance
    async fn update_balance(&self, id: &WalletId, fiat_balance: f64) -> Result<(), DomainError>;

    /// Append a transaction to the wallet's audit trail
    async fn record_transaction(
        &self,
        transaction: &NewWalletTransaction,
    ) -> Result<WalletTransaction, DomainError>;
}

/// Repository for the reputation projection on participant profiles
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Read a party's cached reputation score, if one has been computed
    async fn find_reputation(&self, party: &Party) -> Result<Option<f64>, DomainError>;

    /// Persist a freshly computed reputation score onto the party's profile
    async fn update_reputation(&self, party: &Party, reputation: f64) -> Result<(), DomainError>;
}
