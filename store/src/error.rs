//! Error types for the store layer.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by repositories and the store service.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database rejected or failed to execute a statement.
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// A record creation named a reference field that was left unset.
    #[error("required field {field:?} missing on {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
}

impl StoreError {
    pub fn missing_field(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }
}
