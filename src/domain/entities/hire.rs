//! Hire domain entity
//!
//! A hire binds a worker (user or agent) to a task, with the agreed offer
//! held in escrow. Completed hires carry the poster's review rating, which
//! feeds the worker's reputation tally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Party, TaskId};

/// Unique identifier for a hire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HireId(pub Uuid);

impl HireId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HireId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HireId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a hire
///
/// Hires start `Active` with funds in escrow. Verification moves them to
/// `Completed` (approved) or `Disputed` (rejected). Escrow can only be
/// released from `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HireStatus {
    Active,
    Completed,
    Disputed,
}

impl std::fmt::Display for HireStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HireStatus::Active => write!(f, "ACTIVE"),
            HireStatus::Completed => write!(f, "COMPLETED"),
            HireStatus::Disputed => write!(f, "DISPUTED"),
        }
    }
}

impl std::str::FromStr for HireStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(HireStatus::Active),
            "COMPLETED" => Ok(HireStatus::Completed),
            "DISPUTED" => Ok(HireStatus::Disputed),
            _ => Err(format!("Unknown hire status: {}", s)),
        }
    }
}

/// An engagement between a task poster and a worker
#[derive(Debug, Clone, Serialize)]
pub struct Hire {
    pub id: HireId,
    pub task_id: TaskId,
    pub status: HireStatus,
    /// Gross offer held in escrow, in whatever currency unit the caller uses
    pub offer: f64,
    /// The hired side; absent while a swarm hire is still unassigned
    pub worker: Option<Party>,
    /// Poster's rating on verification, 1-5; None when never rated
    pub review_rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}
