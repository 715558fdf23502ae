//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Hire, HireId, HireStatus, NewWalletTransaction, Party, TaskId, TaskStatus, Wallet, WalletId,
    WalletTransaction, WalletTransactionId,
};
use crate::domain::ports::{
    HireRepository, ProfileRepository, TaskRepository, WalletRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Hire Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryHireRepository {
    hires: Arc<RwLock<HashMap<HireId, Hire>>>,
}

impl InMemoryHireRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a hire for testing
    pub fn with_hire(self, hire: Hire) -> Self {
        {
            let mut hires = self.hires.write().unwrap();
            hires.insert(hire.id, hire);
        }
        self
    }
}

#[async_trait]
impl HireRepository for InMemoryHireRepository {
    async fn find_by_id(&self, id: &HireId) -> Result<Option<Hire>, DomainError> {
        let hires = self.hires.read().unwrap();
        Ok(hires.get(id).cloned())
    }

    async fn find_by_worker(&self, worker: &Party) -> Result<Vec<Hire>, DomainError> {
        let hires = self.hires.read().unwrap();
        Ok(hires
            .values()
            .filter(|hire| hire.worker == Some(*worker))
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: &HireId, status: HireStatus) -> Result<(), DomainError> {
        let mut hires = self.hires.write().unwrap();
        match hires.get_mut(id) {
            Some(hire) => {
                hire.status = status;
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Hire not found: {}", id))),
        }
    }
}

// ============================================================================
// In-Memory Task Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTaskRepository {
    statuses: Arc<RwLock<HashMap<TaskId, TaskStatus>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status last written for a task, for test assertions
    pub async fn status_of(&self, id: &TaskId) -> Option<TaskStatus> {
        let statuses = self.statuses.read().unwrap();
        statuses.get(id).copied()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> Result<(), DomainError> {
        let mut statuses = self.statuses.write().unwrap();
        statuses.insert(*id, status);
        Ok(())
    }
}

// ============================================================================
// In-Memory Wallet Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryWalletRepository {
    wallets: Arc<RwLock<HashMap<WalletId, Wallet>>>,
    transactions: Arc<RwLock<Vec<WalletTransaction>>>,
}

impl InMemoryWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a wallet for testing
    pub fn with_wallet(self, wallet: Wallet) -> Self {
        {
            let mut wallets = self.wallets.write().unwrap();
            wallets.insert(wallet.id, wallet);
        }
        self
    }

    /// Recorded transactions for a wallet, for test assertions
    pub async fn transactions_for(&self, wallet_id: &WalletId) -> Vec<WalletTransaction> {
        let transactions = self.transactions.read().unwrap();
        transactions
            .iter()
            .filter(|tx| tx.wallet_id == *wallet_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl WalletRepository for InMemoryWalletRepository {
    async fn find_by_owner(&self, owner: &Party) -> Result<Option<Wallet>, DomainError> {
        let wallets = self.wallets.read().unwrap();
        Ok(wallets.values().find(|w| w.owner == *owner).cloned())
    }

    async fn update_balance(&self, id: &WalletId, fiat_balance: f64) -> Result<(), DomainError> {
        let mut wallets = self.wallets.write().unwrap();
        match wallets.get_mut(id) {
            Some(wallet) => {
                wallet.fiat_balance = fiat_balance;
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Wallet not found: {}", id))),
        }
    }

    async fn record_transaction(
        &self,
        transaction: &NewWalletTransaction,
    ) -> Result<WalletTransaction, DomainError> {
        let recorded = WalletTransaction {
            id: WalletTransactionId::new(),
            wallet_id: transaction.wallet_id,
            amount: transaction.amount,
            direction: transaction.direction,
            method: transaction.method,
            reference: transaction.reference.clone(),
            created_at: Utc::now(),
        };

        let mut transactions = self.transactions.write().unwrap();
        transactions.push(recorded.clone());
        Ok(recorded)
    }
}

// ============================================================================
// In-Memory Profile Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProfileRepository {
    reputations: Arc<RwLock<HashMap<Party, f64>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a cached reputation for testing
    pub fn with_reputation(self, party: Party, reputation: f64) -> Self {
        {
            let mut reputations = self.reputations.write().unwrap();
            reputations.insert(party, reputation);
        }
        self
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_reputation(&self, party: &Party) -> Result<Option<f64>, DomainError> {
        let reputations = self.reputations.read().unwrap();
        Ok(reputations.get(party).copied())
    }

    async fn update_reputation(&self, party: &Party, reputation: f64) -> Result<(), DomainError> {
        let mut reputations = self.reputations.write().unwrap();
        reputations.insert(*party, reputation);
        Ok(())
    }
}
