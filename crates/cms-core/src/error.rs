//! # AppError
//!
//! Centralized error handling for the seeder.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all cms-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// A local precondition is not met (e.g., asset file missing);
    /// nothing has been attempted against the store yet.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Assembled content does not match the registered schema for its
    /// section type. This is a configuration bug, surfaced at assembly time.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource already exists (e.g., an occupied storage key)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Infrastructure failure (e.g., store down, storage write error)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for cms-core logic.
pub type Result<T> = std::result::Result<T, AppError>;
