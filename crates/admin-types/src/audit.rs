//! Append-only audit trail types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of administrative action recorded in the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    UpdateStatus,
    VerifyCredentials,
    DeleteUser,
    RestoreUser,
    CreateUser,
}

/// One immutable audit entry. The trail is append-only and kept
/// newest-first; `details` carries the fields relevant to the action
/// (typically the subject id plus what changed). A `details` id may
/// reference any record ever seen; no referential integrity against the
/// live collection is implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Time-prefixed unique id; sorts by creation time.
    pub id: String,
    pub action: AuditAction,
    /// Who performed the action ("admin" when unspecified, "system" for
    /// registrations).
    pub actor: String,
    #[serde(default)]
    pub details: HashMap<String, serde_json::Value>,
    /// RFC3339 instant assigned at insertion.
    pub timestamp: String,
}
