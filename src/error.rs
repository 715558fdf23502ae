//! Error types for the Symbio core
//!
//! `DomainError` is the single error surface shared by the repository ports
//! and the application services. The pure scoring and settlement functions are
//! total over their documented input domains and never return errors;
//! rejecting malformed inputs belongs to the calling workflow.

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}
