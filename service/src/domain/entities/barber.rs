//! Barber profile domain entity
//!
//! A barber profile shares its id with the user it was derived from and exists
//! only while that user's role is barber.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{UserId, UserSnapshot};

/// Placeholder bio written on every newly created profile
pub const WELCOME_BIO: &str = "Welcome! Please update your professional bio.";

/// Fields written when a profile is created.
///
/// Every field is deterministic given the user snapshot; the creation timestamp is
/// assigned by the store at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBarberProfile {
    pub full_name: String,
    pub email: String,
    pub bio: String,
    pub services: Vec<String>,
    pub rating: f64,
    pub total_ratings: i32,
}

impl NewBarberProfile {
    /// Build the initial profile from the user's post-change snapshot
    pub fn from_user(user: &UserSnapshot) -> Self {
        Self {
            full_name: user.username().unwrap_or_default().to_string(),
            email: user.email().unwrap_or_default().to_string(),
            bio: WELCOME_BIO.to_string(),
            services: Vec::new(),
            rating: 0.0,
            total_ratings: 0,
        }
    }
}

/// A stored barber profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberProfile {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub bio: String,
    pub services: Vec<String>,
    pub rating: f64,
    pub total_ratings: i32,
    pub created_at: DateTime<Utc>,
}

impl BarberProfile {
    /// Materialize a profile as the store would after a write at `created_at`
    pub fn from_new(id: UserId, profile: NewBarberProfile, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: profile.full_name,
            email: profile.email,
            bio: profile.bio,
            services: profile.services,
            rating: profile.rating,
            total_ratings: profile.total_ratings,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_user_copies_username_and_email() {
        let user = UserSnapshot::new()
            .with("role", "barber")
            .with("username", "Al")
            .with("email", "al@x.com");

        let profile = NewBarberProfile::from_user(&user);

        assert_eq!(profile.full_name, "Al");
        assert_eq!(profile.email, "al@x.com");
        assert_eq!(profile.bio, WELCOME_BIO);
        assert!(profile.services.is_empty());
        assert_eq!(profile.rating, 0.0);
        assert_eq!(profile.total_ratings, 0);
    }

    #[test]
    fn from_user_defaults_missing_fields_to_empty() {
        let user = UserSnapshot::new().with("role", "barber");

        let profile = NewBarberProfile::from_user(&user);

        assert_eq!(profile.full_name, "");
        assert_eq!(profile.email, "");
    }

    #[test]
    fn serializes_with_document_field_names() {
        let profile = NewBarberProfile::from_user(&UserSnapshot::new().with("username", "Al"));
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["fullName"], "Al");
        assert_eq!(json["totalRatings"], 0);
        assert_eq!(json["services"], serde_json::json!([]));
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn from_new_keeps_fields() {
        let now = Utc::now();
        let new = NewBarberProfile::from_user(&UserSnapshot::new().with("email", "b@x.com"));

        let stored = BarberProfile::from_new(UserId::from("u1"), new, now);

        assert_eq!(stored.id, UserId::from("u1"));
        assert_eq!(stored.email, "b@x.com");
        assert_eq!(stored.created_at, now);
    }
}
