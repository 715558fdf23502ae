//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `reputation` / `escrow`: the pure numeric core

pub mod entities;
pub mod escrow;
pub mod ports;
pub mod reputation;
