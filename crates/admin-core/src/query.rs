//! Read-only filter projection over the users collection.

use admin_types::{UserFilter, UserRecord};

/// Apply a filter to the stored collection: exact role, exact status, and
/// case-insensitive substring over name + email. Conditions AND together;
/// an empty filter is the identity and stored order is preserved.
pub fn filter_users(users: &[UserRecord], filter: &UserFilter) -> Vec<UserRecord> {
    let needle = filter.q.as_ref().map(|q| q.to_lowercase());
    users
        .iter()
        .filter(|u| filter.role.map_or(true, |r| u.role == r))
        .filter(|u| filter.status.map_or(true, |s| u.status == s))
        .filter(|u| {
            needle.as_ref().map_or(true, |q| {
                format!("{} {}", u.name, u.email)
                    .to_lowercase()
                    .contains(q.as_str())
            })
        })
        .cloned()
        .collect()
}
