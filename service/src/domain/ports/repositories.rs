//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewBarberProfile, UserId};
use crate::error::DomainError;

/// Repository for barber profiles, keyed by the owning user's id
#[async_trait]
pub trait BarberRepository: Send + Sync {
    /// Create the profile, or overwrite it if one already exists for `id`.
    /// The store stamps the creation time at write time.
    async fn upsert(&self, id: &UserId, profile: &NewBarberProfile) -> Result<(), DomainError>;

    /// Delete the profile. Deleting a missing profile succeeds.
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
