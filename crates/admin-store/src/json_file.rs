//! JSON-file RecordStore: one JSON array per collection under a data dir.

use crate::seed::seed_users;
use admin_types::{AuditEntry, RecordStore, StoreError, UserRecord};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const USERS_FILE: &str = "users.json";
const AUDIT_FILE: &str = "audit.json";

enum Payload<T> {
    Loaded(Vec<T>),
    Missing,
    Corrupt,
}

/// File-backed implementation of RecordStore. Each collection is a single
/// JSON array; writes replace the whole file through a temp-file rename so
/// a reader observes either the old or the new snapshot, never a partial
/// write. Single-writer: concurrent processes sharing the same dir are not
/// coordinated.
pub struct JsonFileRecordStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileRecordStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_collection<T>(&self, file: &str) -> Result<Payload<T>, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        let path = self.dir.join(file);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Payload::Missing),
            Err(e) => return Err(StoreError::Other(e.to_string())),
        };
        match serde_json::from_str(&content) {
            Ok(items) => Ok(Payload::Loaded(items)),
            Err(e) => {
                tracing::warn!(file, error = %e, "corrupt collection payload, using fallback");
                Ok(Payload::Corrupt)
            }
        }
    }

    async fn write_collection<T>(&self, file: &str, items: &[T]) -> Result<(), StoreError>
    where
        T: serde::Serialize,
    {
        let _guard = self.write_lock.lock().await;
        let payload =
            serde_json::to_vec_pretty(items).map_err(|e| StoreError::Other(e.to_string()))?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        let tmp = self.dir.join(format!("{file}.tmp"));
        tokio::fs::write(&tmp, &payload)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        tokio::fs::rename(&tmp, self.dir.join(file))
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn read_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        match self.read_collection::<UserRecord>(USERS_FILE).await? {
            Payload::Loaded(users) => Ok(users),
            Payload::Missing => {
                let seed = seed_users();
                self.write_collection(USERS_FILE, &seed).await?;
                tracing::info!(count = seed.len(), "seeded users collection");
                Ok(seed)
            }
            // keep the corrupt file in place; only an absent collection
            // gets the seed persisted
            Payload::Corrupt => Ok(seed_users()),
        }
    }

    async fn write_users(&self, users: &[UserRecord]) -> Result<(), StoreError> {
        self.write_collection(USERS_FILE, users).await
    }

    async fn read_audit(&self) -> Result<Vec<AuditEntry>, StoreError> {
        match self.read_collection::<AuditEntry>(AUDIT_FILE).await? {
            Payload::Loaded(entries) => Ok(entries),
            Payload::Missing | Payload::Corrupt => Ok(Vec::new()),
        }
    }

    async fn write_audit(&self, entries: &[AuditEntry]) -> Result<(), StoreError> {
        self.write_collection(AUDIT_FILE, entries).await
    }
}
