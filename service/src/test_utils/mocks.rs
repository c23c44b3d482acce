//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{BarberProfile, NewBarberProfile, UserId};
use crate::domain::ports::BarberRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Barber Repository
// ============================================================================

/// A store call as the repository received it
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Upsert(UserId, NewBarberProfile),
    Delete(UserId),
}

#[derive(Default)]
pub struct InMemoryBarberRepository {
    barbers: Arc<RwLock<HashMap<UserId, BarberProfile>>>,
    calls: Arc<RwLock<Vec<StoreCall>>>,
    fail: bool,
}

impl InMemoryBarberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write fail as if the store were unreachable
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Pre-populate a profile without recording a call
    pub fn seed(&self, id: &UserId, profile: &NewBarberProfile) {
        let mut barbers = self.barbers.write().unwrap();
        barbers.insert(
            id.clone(),
            BarberProfile::from_new(id.clone(), profile.clone(), Utc::now()),
        );
    }

    pub fn get(&self, id: &UserId) -> Option<BarberProfile> {
        self.barbers.read().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.barbers.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every store call received so far, in order
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BarberRepository for InMemoryBarberRepository {
    async fn upsert(&self, id: &UserId, profile: &NewBarberProfile) -> Result<(), DomainError> {
        self.calls
            .write()
            .unwrap()
            .push(StoreCall::Upsert(id.clone(), profile.clone()));
        self.check_available()?;

        let mut barbers = self.barbers.write().unwrap();
        barbers.insert(
            id.clone(),
            BarberProfile::from_new(id.clone(), profile.clone(), Utc::now()),
        );
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        self.calls
            .write()
            .unwrap()
            .push(StoreCall::Delete(id.clone()));
        self.check_available()?;

        self.barbers.write().unwrap().remove(id);
        Ok(())
    }
}
