use crate::core::client::database::DatabaseError;
use thiserror::Error;

/// Result type for bootstrap operations
pub type SetupResult<T> = Result<T, SetupError>;

/// Error types for the bootstrap run
///
/// None of these are recoverable locally: every variant aborts the run and
/// is surfaced to the operator.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Server unreachable. The run fails before any effect is applied, so no
    /// partial state is left behind.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// An existing collection or index with incompatible options. Requires
    /// manual resolution.
    #[error("Schema conflict error: {0}")]
    SchemaConflictError(String),

    /// Seed data rejected by server-side validation
    #[error("Insert error: {0}")]
    InsertError(String),

    /// Setup Command error
    #[error("Setup Command Error: {0}")]
    SetupCommandError(String),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),
}
