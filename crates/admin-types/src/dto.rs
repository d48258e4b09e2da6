//! Request and response DTOs for the admin HTTP surface.

use crate::{AuditEntry, CredentialDoc, UserRecord, UserRole, UserStatus};
use serde::{Deserialize, Serialize};

/// Base response envelope. `code` mirrors HTTP semantics in-body; the
/// transport status stays 200 so the browser console can always read the
/// envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseResponse<T> {
    #[serde(default = "default_code")]
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

fn default_code() -> i32 {
    200
}

/// List/get responses.
pub type UserListResponse = BaseResponse<Vec<UserRecord>>;
pub type UserResponse = BaseResponse<UserRecord>;
pub type AuditLogResponse = BaseResponse<Vec<AuditEntry>>;

/// Result of a credential verification: the updated record plus the audit
/// entry the verification produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedCredentials {
    pub user: UserRecord,
    pub audit: AuditEntry,
}

pub type VerifyResponse = BaseResponse<VerifiedCredentials>;

/// Body for the generic status transition.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: UserStatus,
    #[serde(default)]
    pub actor: Option<String>,
}

/// Body for actor-only write commands (approve/suspend/verify/delete/restore).
/// The whole body may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorRequest {
    #[serde(default)]
    pub actor: Option<String>,
}

/// Body for registering a user through the admin surface.
#[derive(Debug, Clone, Deserialize)]
pub struct AddUserRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub role: UserRole,
    #[serde(default)]
    pub docs: Vec<CredentialDoc>,
    #[serde(default)]
    pub actor: Option<String>,
}
