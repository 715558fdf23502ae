//! Domain entities
//!
//! Pure domain models representing core business concepts. Persistence
//! belongs to the host application's adapters behind the repository ports.

pub mod hire;
pub mod party;
pub mod task;
pub mod wallet;

pub use hire::{Hire, HireId, HireStatus};
pub use party::{AgentId, Party, UserId};
pub use task::{TaskId, TaskStatus};
pub use wallet::{
    NewWalletTransaction, PaymentMethod, TransactionDirection, Wallet, WalletId,
    WalletTransaction, WalletTransactionId,
};
