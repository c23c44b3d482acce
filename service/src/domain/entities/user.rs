//! User domain entity
//!
//! The upstream user account as seen through change events. Only the fields the
//! reconciler reads are exposed; every other field on a snapshot is carried along
//! untouched and ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Role value that makes a user a barber
pub const BARBER_ROLE: &str = "barber";

/// Opaque identifier of a user document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a snapshot's role counts as barber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleState {
    Barber,
    NotBarber,
}

/// Field snapshot of a user document at one point in time.
///
/// Snapshots are schemaless: a missing or non-string field reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSnapshot(pub Map<String, Value>);

impl UserSnapshot {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string field, consuming and returning the snapshot
    #[allow(dead_code)]
    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.0.insert(field.to_string(), Value::String(value.to_string()));
        self
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn role(&self) -> Option<&str> {
        self.str_field("role")
    }

    pub fn username(&self) -> Option<&str> {
        self.str_field("username")
    }

    pub fn email(&self) -> Option<&str> {
        self.str_field("email")
    }

    /// Classify the role. Absent and non-string roles are not barber.
    pub fn role_state(&self) -> RoleState {
        match self.role() {
            Some(BARBER_ROLE) => RoleState::Barber,
            _ => RoleState::NotBarber,
        }
    }
}

/// A single update to a user document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserChange {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub before: UserSnapshot,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub after: UserSnapshot,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<UserSnapshot, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<UserSnapshot>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserChange {
    #[allow(dead_code)]
    pub fn new(id: impl Into<UserId>, before: UserSnapshot, after: UserSnapshot) -> Self {
        Self {
            id: id.into(),
            before,
            after,
        }
    }
}
