//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    /// The id is not in a format the store can address.
    #[error("Invalid post id: {0}")]
    InvalidId(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
