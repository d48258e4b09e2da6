//! User records: role, lifecycle status, verification credentials.

use serde::{Deserialize, Serialize};

/// Account type, fixed at onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Developer,
    Investor,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Developer => "developer",
            UserRole::Investor => "investor",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a user record. `Deleted` is a status value, not
/// removal: records are soft-deleted and never purged from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Pending,
    Approved,
    Suspended,
    Deleted,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Pending => "pending",
            UserStatus::Approved => "approved",
            UserStatus::Suspended => "suspended",
            UserStatus::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One onboarding document. Supplied at registration, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDoc {
    pub name: String,
    pub url: String,
}

/// Verification credentials owned by a user record. `id_verified` is the
/// only field the admin core mutates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "idVerified", default)]
    pub id_verified: bool,
    #[serde(default)]
    pub docs: Vec<CredentialDoc>,
}

/// Full user record as persisted in the users collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(default)]
    pub credentials: Credentials,
}

/// Partial record accepted at registration; the facade assigns `id` and
/// `created_at`, status starts pending and id documents unverified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub role: UserRole,
    #[serde(default)]
    pub docs: Vec<CredentialDoc>,
}

/// Filter for listing users. Conditions compose with logical AND; the
/// default (empty) filter is the identity projection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    /// Exact match against the account type.
    #[serde(rename = "type", default)]
    pub role: Option<UserRole>,
    /// Exact match against the lifecycle status.
    #[serde(default)]
    pub status: Option<UserStatus>,
    /// Case-insensitive substring over name + email.
    #[serde(default)]
    pub q: Option<String>,
}
