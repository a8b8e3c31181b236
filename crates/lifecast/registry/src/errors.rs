//! Error types for registry operations.

use lifecast_audit::AuditError;
use lifecast_types::ScenarioId;
use thiserror::Error;

/// Errors that can occur in registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The referenced scenario does not exist
    #[error("scenario not found: {0}")]
    ScenarioNotFound(ScenarioId),

    /// The audit sink rejected the operation's record
    #[error(transparent)]
    Audit(#[from] AuditError),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
