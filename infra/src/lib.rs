//! # Infrastructure Layer
//!
//! Concrete implementations of the repository traits defined in `sb_core`,
//! backed by MySQL through SQLx. The API layer wires these into the domain
//! services; nothing in here contains business rules.

pub mod database;

pub use database::connection::DatabasePool;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
