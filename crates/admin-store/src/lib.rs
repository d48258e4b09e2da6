//! RecordStore implementations: in-memory and JSON-file backed.

mod json_file;
mod memory;
mod seed;

pub use admin_types::{AuditEntry, RecordStore, StoreError, UserRecord};
pub use json_file::JsonFileRecordStore;
pub use memory::InMemoryRecordStore;
pub use seed::seed_users;
