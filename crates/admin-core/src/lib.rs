//! Lifecycle engine, query projection, and command facade for the admin
//! user-administration core. `AdminService` is the only surface UI-facing
//! code should call; the store handle is injected at construction.

mod lifecycle;
mod query;
mod service;

pub use admin_types::{
    AdminError, AuditAction, AuditEntry, NewUser, RecordStore, UserFilter, UserRecord, UserStatus,
    VerifiedCredentials,
};
pub use service::AdminService;
