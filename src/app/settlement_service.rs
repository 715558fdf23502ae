//! Escrow settlement service
//!
//! Releases an active hire's escrow: splits the offer into platform fee and
//! worker payout, completes the hire and its task, and credits the worker's
//! wallet with a transaction on the audit trail. Authorization (only the task
//! owner may release) and transactional atomicity belong to the caller and
//! its adapters.

use std::sync::Arc;

use crate::domain::entities::{
    HireId, HireStatus, NewWalletTransaction, PaymentMethod, TaskStatus, TransactionDirection,
};
use crate::domain::escrow::{EscrowTerms, Settlement};
use crate::domain::ports::{HireRepository, TaskRepository, WalletRepository};
use crate::error::DomainError;

/// Result of releasing one hire's escrow
#[derive(Debug, Clone)]
pub struct SettlementResult {
    pub hire_id: HireId,
    pub net_paid: f64,
    pub fee_charged: f64,
}

/// Service for releasing escrowed hire payments
pub struct SettlementService<HR, TR, WR>
where
    HR: HireRepository,
    TR: TaskRepository,
    WR: WalletRepository,
{
    hires: Arc<HR>,
    tasks: Arc<TR>,
    wallets: Arc<WR>,
    platform_fee_bps: u32,
}

impl<HR, TR, WR> SettlementService<HR, TR, WR>
where
    HR: HireRepository,
    TR: TaskRepository,
    WR: WalletRepository,
{
    pub fn new(hires: Arc<HR>, tasks: Arc<TR>, wallets: Arc<WR>, platform_fee_bps: u32) -> Self {
        Self {
            hires,
            tasks,
            wallets,
            platform_fee_bps,
        }
    }

    /// Release an active hire's escrow to its worker.
    ///
    /// The hire and its task move to `Completed` and the worker's wallet is
    /// credited with the net payout. A hire with no assigned worker still
    /// completes, just without a payout.
    pub async fn release_escrow(&self, hire_id: &HireId) -> Result<SettlementResult, DomainError> {
        let hire = self
            .hires
            .find_by_id(hire_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Hire not found: {}", hire_id)))?;

        if hire.status != HireStatus::Active {
            return Err(DomainError::Validation(format!(
                "Hire {} is not active (status: {})",
                hire.id, hire.status
            )));
        }

        let terms = EscrowTerms {
            gross_offer: hire.offer,
            fee_bps: self.platform_fee_bps,
        };
        let Settlement { fee, net } = terms.settle();

        self.hires
            .update_status(&hire.id, HireStatus::Completed)
            .await?;
        self.tasks
            .update_status(&hire.task_id, TaskStatus::Completed)
            .await?;

        if let Some(worker) = hire.worker {
            let wallet = self.wallets.find_by_owner(&worker).await?.ok_or_else(|| {
                DomainError::Validation(format!("Worker wallet not found: {}", worker))
            })?;

            self.wallets
                .update_balance(&wallet.id, wallet.fiat_balance + net)
                .await?;

            self.wallets
                .record_transaction(&NewWalletTransaction {
                    wallet_id: wallet.id,
                    amount: net,
                    direction: TransactionDirection::Credit,
                    method: PaymentMethod::Fiat,
                    reference: format!("hire-{}", hire.id),
                })
                .await?;
        }

        tracing::info!(
            hire_id = %hire.id,
            task_id = %hire.task_id,
            gross = hire.offer,
            fee = fee,
            net = net,
            "Escrow released"
        );

        Ok(SettlementResult {
            hire_id: hire.id,
            net_paid: net,
            fee_charged: fee,
        })
    }
}
