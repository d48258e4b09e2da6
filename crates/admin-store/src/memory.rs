//! In-memory RecordStore (process lifetime only).

use crate::seed::seed_users;
use admin_types::{AuditEntry, RecordStore, StoreError, UserRecord};
use tokio::sync::RwLock;

/// In-memory implementation of RecordStore. The users collection starts
/// unseeded; the first read installs the fixed demo set, mirroring the
/// first-run bootstrap of the persistent backend.
pub struct InMemoryRecordStore {
    users: RwLock<Option<Vec<UserRecord>>>,
    audit: RwLock<Vec<AuditEntry>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(None),
            audit: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn read_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        {
            let guard = self.users.read().await;
            if let Some(ref users) = *guard {
                return Ok(users.clone());
            }
        }
        let mut guard = self.users.write().await;
        // a concurrent reader may have seeded between the two locks
        Ok(guard.get_or_insert_with(seed_users).clone())
    }

    async fn write_users(&self, users: &[UserRecord]) -> Result<(), StoreError> {
        *self.users.write().await = Some(users.to_vec());
        Ok(())
    }

    async fn read_audit(&self) -> Result<Vec<AuditEntry>, StoreError> {
        Ok(self.audit.read().await.clone())
    }

    async fn write_audit(&self, entries: &[AuditEntry]) -> Result<(), StoreError> {
        *self.audit.write().await = entries.to_vec();
        Ok(())
    }
}
