//! Error types for CRM core operations.
//!
//! The mock stores raise (`NotFound`), the remote services mostly absorb
//! failures and return empty results, and forms raise `Validation` before any
//! repository call is made. The CLI layer maps these to user-facing messages.

use thiserror::Error;

use crate::forms::FieldErrors;

/// Result type alias for CRM operations.
pub type Result<T> = std::result::Result<T, CrmError>;

/// Core error type for CRM operations.
#[derive(Debug, Error)]
pub enum CrmError {
    /// Record not present in a mock store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Form validation failed; never produced by a service
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Backend answered but reported a failure
    #[error("Backend error: {0}")]
    Backend(String),

    /// Backend client could not complete the call
    #[error("Transport error: {0}")]
    Transport(String),

    /// Embedded seed data could not be loaded
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// A submission is already in flight
    #[error("Already in progress: {0}")]
    InProgress(String),

    /// A store has no identity left to hand out
    #[error("Id space exhausted: {0}")]
    IdsExhausted(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON encoding or decoding error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CrmError {
    /// Build a `NotFound` error for a record kind and id.
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        CrmError::NotFound(format!("{} with ID {} not found", kind, id))
    }
}

impl From<serde_json::Error> for CrmError {
    fn from(err: serde_json::Error) -> Self {
        CrmError::Serialization(err.to_string())
    }
}
