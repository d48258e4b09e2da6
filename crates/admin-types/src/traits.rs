//! Storage trait and error taxonomy for the admin core.

use crate::{AuditEntry, UserRecord};
use async_trait::async_trait;

/// Durable whole-collection persistence for the users collection and the
/// audit trail. Callers always submit complete collections; no per-record
/// update exists at this layer. Implementations are the only code touching
/// the persisted namespace.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Current users collection in stored order. An absent collection is
    /// seeded with the fixed demo set and persisted before returning; a
    /// corrupt payload falls back to the seed and is logged, never surfaced.
    async fn read_users(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Overwrite the whole users collection.
    async fn write_users(&self, users: &[UserRecord]) -> Result<(), StoreError>;

    /// Audit trail, newest-first. Empty when absent; a corrupt payload
    /// falls back to empty and is logged.
    async fn read_audit(&self) -> Result<Vec<AuditEntry>, StoreError>;

    /// Overwrite the whole audit trail (newest-first ordering is the
    /// caller's responsibility).
    async fn write_audit(&self, entries: &[AuditEntry]) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying persistence rejected a write; the pre-write state is
    /// authoritative for what happened.
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Command-level failures surfaced to callers of the facade. Corrupt
/// persisted payloads never appear here; the store recovers from them
/// internally.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("store: {0}")]
    Store(#[from] StoreError),
}
