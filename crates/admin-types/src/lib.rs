//! Core types and traits for the admin user-administration core.
//!
//! JSON field names match the persisted admin-console layout (`type`,
//! `createdAt`, `idVerified`) so stored collections stay wire-compatible.

mod audit;
mod dto;
mod traits;
mod user;

pub use audit::*;
pub use dto::*;
pub use traits::*;
pub use user::*;
