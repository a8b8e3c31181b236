//! Error types for engine operations.

use lifecast_audit::AuditError;
use lifecast_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur in simulation, comparison, or branching.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A registry lookup or mutation failed (including scenario-not-found)
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The audit sink rejected the operation's record
    #[error(transparent)]
    Audit(#[from] AuditError),

    /// Comparison was invoked with no scenario identifiers
    #[error("cannot compare an empty scenario list")]
    EmptyComparison,
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
