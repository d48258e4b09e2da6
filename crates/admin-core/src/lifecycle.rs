//! Lifecycle transitions over a full users snapshot.
//!
//! Each transition touches exactly one record, leaves every other record
//! unchanged in stored order, and yields the one audit entry describing the
//! change. An unknown id fails with `NotFound` before anything is mutated.

use admin_types::{
    AdminError, AuditAction, AuditEntry, Credentials, NewUser, UserRecord, UserStatus,
};
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

/// Time-prefixed unique audit id; sorts by creation time and stays
/// collision-free within one millisecond.
fn audit_id() -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), Uuid::new_v4().simple())
}

fn entry(
    action: AuditAction,
    actor: &str,
    details: HashMap<String, serde_json::Value>,
) -> AuditEntry {
    AuditEntry {
        id: audit_id(),
        action,
        actor: actor.to_string(),
        details,
        timestamp: Utc::now().to_rfc3339(),
    }
}

fn find_mut<'a>(
    snapshot: &'a mut [UserRecord],
    id: &str,
) -> Result<&'a mut UserRecord, AdminError> {
    snapshot
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| AdminError::NotFound(id.to_string()))
}

/// Set a caller-supplied status. No transition table restricts the target:
/// any status may be set from any status, matching the admin console
/// contract (approve and suspend both go through here).
pub fn set_status(
    snapshot: &mut [UserRecord],
    id: &str,
    status: UserStatus,
    actor: &str,
) -> Result<(UserRecord, AuditEntry), AdminError> {
    let user = find_mut(snapshot, id)?;
    user.status = status;
    let mut details = HashMap::new();
    details.insert("id".to_string(), serde_json::json!(user.id));
    details.insert("status".to_string(), serde_json::json!(status));
    Ok((user.clone(), entry(AuditAction::UpdateStatus, actor, details)))
}

/// Mark the id documents verified. `id_verified` is set unconditionally;
/// status only moves when the record is still pending.
pub fn verify_credentials(
    snapshot: &mut [UserRecord],
    id: &str,
    actor: &str,
) -> Result<(UserRecord, AuditEntry), AdminError> {
    let user = find_mut(snapshot, id)?;
    user.credentials.id_verified = true;
    if user.status == UserStatus::Pending {
        user.status = UserStatus::Approved;
    }
    let mut details = HashMap::new();
    details.insert("id".to_string(), serde_json::json!(user.id));
    details.insert("idVerified".to_string(), serde_json::json!(true));
    details.insert("status".to_string(), serde_json::json!(user.status));
    Ok((
        user.clone(),
        entry(AuditAction::VerifyCredentials, actor, details),
    ))
}

/// Soft delete: the record is retained, only the status flips.
pub fn delete_user(
    snapshot: &mut [UserRecord],
    id: &str,
    actor: &str,
) -> Result<(UserRecord, AuditEntry), AdminError> {
    let user = find_mut(snapshot, id)?;
    user.status = UserStatus::Deleted;
    let mut details = HashMap::new();
    details.insert("id".to_string(), serde_json::json!(user.id));
    details.insert("status".to_string(), serde_json::json!(UserStatus::Deleted));
    Ok((user.clone(), entry(AuditAction::DeleteUser, actor, details)))
}

/// Reverse a deletion or suspension; the record comes back approved.
pub fn restore_user(
    snapshot: &mut [UserRecord],
    id: &str,
    actor: &str,
) -> Result<(UserRecord, AuditEntry), AdminError> {
    let user = find_mut(snapshot, id)?;
    user.status = UserStatus::Approved;
    let mut details = HashMap::new();
    details.insert("id".to_string(), serde_json::json!(user.id));
    details.insert(
        "status".to_string(),
        serde_json::json!(UserStatus::Approved),
    );
    Ok((user.clone(), entry(AuditAction::RestoreUser, actor, details)))
}

/// Register a fresh record: id and createdAt are assigned here, status
/// starts pending and the id documents unverified.
pub fn create_user(
    snapshot: &mut Vec<UserRecord>,
    new_user: NewUser,
    actor: &str,
) -> (UserRecord, AuditEntry) {
    let user = UserRecord {
        id: Uuid::new_v4().to_string(),
        name: new_user.name,
        email: new_user.email,
        role: new_user.role,
        status: UserStatus::Pending,
        created_at: Utc::now().to_rfc3339(),
        credentials: Credentials {
            id_verified: false,
            docs: new_user.docs,
        },
    };
    snapshot.push(user.clone());
    let mut details = HashMap::new();
    details.insert("id".to_string(), serde_json::json!(user.id));
    details.insert("type".to_string(), serde_json::json!(user.role));
    (user, entry(AuditAction::CreateUser, actor, details))
}
