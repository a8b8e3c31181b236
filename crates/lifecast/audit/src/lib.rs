//! # lifecast-audit
//!
//! Audit logging contract for Lifecast. Every mutating or compute
//! operation in the registry and engines emits one structured record
//! through the [`AuditLogger`] trait; persistence, encryption, and
//! querying of the trail belong to a separate observability subsystem.
//!
//! A logging failure is not swallowed: callers report it through
//! [`AuditLogger::log_error`] and then propagate it out of the triggering
//! operation.

#![deny(unsafe_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Errors from an audit sink.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit sink rejected record '{event_type}': {message}")]
    SinkFailure { event_type: String, message: String },

    #[error("audit payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One structured audit record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique record identifier
    pub record_id: String,
    /// Operation name, e.g. "scenario.created"
    pub event_type: String,
    /// Operation-specific structured payload
    pub payload: Value,
    /// When the record was emitted
    pub timestamp: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            record_id: format!("audit-{}", Uuid::new_v4()),
            event_type: event_type.into(),
            payload,
            timestamp: Utc::now(),
        }
    }
}

/// Narrow logging contract the core depends on.
///
/// Implementations must be `Send + Sync`; an embedding layer that wants an
/// asynchronous sink can adapt behind this trait (e.g. by queueing).
pub trait AuditLogger: Send + Sync {
    /// Emit one structured record. Failure propagates out of the operation
    /// that triggered the record.
    fn log(&self, event_type: &str, payload: Value) -> Result<(), AuditError>;

    /// Report an error condition, including the failure of `log` itself.
    /// Must not fail; a sink that cannot even report errors should drop
    /// them.
    fn log_error(&self, event_type: &str, error: &dyn std::error::Error, context: Value);
}

/// Audit sink backed by the `tracing` subscriber. Never fails.
#[derive(Debug, Default, Clone)]
pub struct TracingAuditLogger;

impl TracingAuditLogger {
    pub fn new() -> Self {
        Self
    }
}

impl AuditLogger for TracingAuditLogger {
    fn log(&self, event_type: &str, payload: Value) -> Result<(), AuditError> {
        tracing::info!(target: "lifecast::audit", event_type, payload = %payload, "audit record");
        Ok(())
    }

    fn log_error(&self, event_type: &str, error: &dyn std::error::Error, context: Value) {
        tracing::error!(
            target: "lifecast::audit",
            event_type,
            error = %error,
            context = %context,
            "audit error"
        );
    }
}

/// In-memory audit sink that retains every record, append-only.
///
/// Intended for tests and embedded use; cloneable handles share one trail.
#[derive(Debug, Default, Clone)]
pub struct MemoryAuditLogger {
    records: Arc<Mutex<Vec<AuditRecord>>>,
    errors: Arc<Mutex<Vec<AuditRecord>>>,
}

impl MemoryAuditLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records emitted so far.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Snapshot of all error reports.
    pub fn errors(&self) -> Vec<AuditRecord> {
        self.errors.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Records with a given event type.
    pub fn records_of(&self, event_type: &str) -> Vec<AuditRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.event_type == event_type)
            .collect()
    }
}

impl AuditLogger for MemoryAuditLogger {
    fn log(&self, event_type: &str, payload: Value) -> Result<(), AuditError> {
        let mut records = self.records.lock().map_err(|_| AuditError::SinkFailure {
            event_type: event_type.to_string(),
            message: "audit trail lock poisoned".to_string(),
        })?;
        records.push(AuditRecord::new(event_type, payload));
        Ok(())
    }

    fn log_error(&self, event_type: &str, error: &dyn std::error::Error, context: Value) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(AuditRecord::new(
                event_type,
                serde_json::json!({ "error": error.to_string(), "context": context }),
            ));
        }
    }
}
