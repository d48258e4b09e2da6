//! Command facade: the only surface UI-facing code calls.

use crate::{lifecycle, query};
use admin_types::{
    AdminError, AuditEntry, NewUser, RecordStore, UserFilter, UserRecord, UserStatus,
    VerifiedCredentials,
};
use std::sync::Arc;

const DEFAULT_ACTOR: &str = "admin";
const REGISTRATION_ACTOR: &str = "system";

/// Command facade over one injected RecordStore handle.
///
/// Writes are read-modify-replace over the full snapshot: last writer wins.
/// That is the intended model for a single admin session; concurrent
/// sessions sharing one store are not coordinated.
pub struct AdminService {
    store: Arc<dyn RecordStore + Send + Sync>,
}

impl AdminService {
    pub fn new(store: Arc<dyn RecordStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Current collection, filtered. Read-only; stored order preserved.
    pub async fn list_users(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, AdminError> {
        let users = self.store.read_users().await?;
        Ok(query::filter_users(&users, filter))
    }

    /// Single record by id; `None` when the id never resolves.
    pub async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, AdminError> {
        let users = self.store.read_users().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    /// Full audit trail, newest-first.
    pub async fn audit_log(&self) -> Result<Vec<AuditEntry>, AdminError> {
        Ok(self.store.read_audit().await?)
    }

    /// Generic status transition (approve and suspend route through here).
    pub async fn update_user_status(
        &self,
        id: &str,
        status: UserStatus,
        actor: Option<&str>,
    ) -> Result<UserRecord, AdminError> {
        let actor = actor.unwrap_or(DEFAULT_ACTOR);
        let mut users = self.store.read_users().await?;
        let (user, entry) = lifecycle::set_status(&mut users, id, status, actor)?;
        self.commit(&users, entry).await?;
        tracing::info!(user_id = %user.id, status = %status, actor, "user status updated");
        Ok(user)
    }

    /// Verify id documents; returns the updated record plus the audit entry
    /// the verification produced.
    pub async fn verify_credentials(
        &self,
        id: &str,
        actor: Option<&str>,
    ) -> Result<VerifiedCredentials, AdminError> {
        let actor = actor.unwrap_or(DEFAULT_ACTOR);
        let mut users = self.store.read_users().await?;
        let (user, entry) = lifecycle::verify_credentials(&mut users, id, actor)?;
        let audit = entry.clone();
        self.commit(&users, entry).await?;
        tracing::info!(user_id = %user.id, actor, "credentials verified");
        Ok(VerifiedCredentials { user, audit })
    }

    /// Soft delete: the record stays in the collection with status deleted.
    pub async fn delete_user(
        &self,
        id: &str,
        actor: Option<&str>,
    ) -> Result<UserRecord, AdminError> {
        let actor = actor.unwrap_or(DEFAULT_ACTOR);
        let mut users = self.store.read_users().await?;
        let (user, entry) = lifecycle::delete_user(&mut users, id, actor)?;
        self.commit(&users, entry).await?;
        tracing::info!(user_id = %user.id, actor, "user soft-deleted");
        Ok(user)
    }

    /// Reverse a deletion or suspension; the record comes back approved.
    pub async fn restore_user(
        &self,
        id: &str,
        actor: Option<&str>,
    ) -> Result<UserRecord, AdminError> {
        let actor = actor.unwrap_or(DEFAULT_ACTOR);
        let mut users = self.store.read_users().await?;
        let (user, entry) = lifecycle::restore_user(&mut users, id, actor)?;
        self.commit(&users, entry).await?;
        tracing::info!(user_id = %user.id, actor, "user restored");
        Ok(user)
    }

    /// Register a user; id and createdAt are assigned here.
    pub async fn add_user(
        &self,
        new_user: NewUser,
        actor: Option<&str>,
    ) -> Result<UserRecord, AdminError> {
        let actor = actor.unwrap_or(REGISTRATION_ACTOR);
        let mut users = self.store.read_users().await?;
        let (user, entry) = lifecycle::create_user(&mut users, new_user, actor);
        self.commit(&users, entry).await?;
        tracing::info!(user_id = %user.id, role = %user.role, actor, "user registered");
        Ok(user)
    }

    /// Persist the full users snapshot, then prepend one entry to the audit
    /// trail. A failed snapshot write leaves both collections untouched; a
    /// failure of the audit write can leave a persisted snapshot without its
    /// trail entry (single-writer store, no cross-file rollback).
    async fn commit(&self, users: &[UserRecord], entry: AuditEntry) -> Result<(), AdminError> {
        self.store.write_users(users).await?;
        let mut audit = self.store.read_audit().await?;
        audit.insert(0, entry);
        self.store.write_audit(&audit).await?;
        Ok(())
    }
}
