//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{UserChange, UserSnapshot};

/// A user snapshot carrying only a role
pub fn snapshot_with_role(role: &str) -> UserSnapshot {
    UserSnapshot::new().with("role", role)
}

/// A barber user with a username and email
pub fn test_barber_user() -> UserSnapshot {
    snapshot_with_role("barber")
        .with("username", "Al")
        .with("email", "al@x.com")
}

/// A change that only touches the role
pub fn role_change(id: &str, before: &str, after: &str) -> UserChange {
    UserChange::new(id, snapshot_with_role(before), snapshot_with_role(after))
}
