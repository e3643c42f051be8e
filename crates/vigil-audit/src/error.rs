//! Audit error types.

use thiserror::Error;

/// Errors from the audit sink.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Log file or directory could not be written.
    #[error("audit write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized.
    #[error("audit serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;
