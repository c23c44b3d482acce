//! Role reconciler
//!
//! Keeps barber profiles in step with user roles. Each user change is reduced to a
//! transition between two states, barber and not-barber:
//!
//! - not-barber -> barber: create (or overwrite) the profile
//! - barber -> not-barber: delete the profile
//! - anything else: nothing to do
//!
//! The decision is a pure function of the two role values. Applying it costs at most
//! one store call, and store failures are returned to the caller untouched so the
//! event sender can redeliver.

use std::sync::Arc;

use crate::domain::entities::{NewBarberProfile, RoleState, UserChange, UserId, UserSnapshot};
use crate::domain::ports::BarberRepository;
use crate::error::AppError;

/// Why a change needed no store call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The role value is identical before and after
    RoleUnchanged,
    /// The role changed, but neither side is barber
    NotBarberTransition,
}

/// What a user change requires of the barber store
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Create(NewBarberProfile),
    Delete,
    NoOp(NoOpReason),
}

impl Action {
    /// Short label used in logs and responses
    pub fn label(&self) -> &'static str {
        match self {
            Action::Create(_) => "created",
            Action::Delete => "deleted",
            Action::NoOp(_) => "noop",
        }
    }
}

/// Decide what to do for a single user change.
///
/// Only `role` is inspected. A missing or non-string role counts as not-barber.
pub fn decide(before: &UserSnapshot, after: &UserSnapshot) -> Action {
    match (before.role_state(), after.role_state()) {
        (RoleState::NotBarber, RoleState::Barber) => {
            Action::Create(NewBarberProfile::from_user(after))
        }
        (RoleState::Barber, RoleState::NotBarber) => Action::Delete,
        _ if before.role() == after.role() => Action::NoOp(NoOpReason::RoleUnchanged),
        _ => Action::NoOp(NoOpReason::NotBarberTransition),
    }
}

/// Applies role transitions to the barber store
pub struct RoleReconciler<BR>
where
    BR: BarberRepository,
{
    barbers: Arc<BR>,
}

impl<BR> RoleReconciler<BR>
where
    BR: BarberRepository,
{
    pub fn new(barbers: Arc<BR>) -> Self {
        Self { barbers }
    }

    /// Reconcile one user change and return the action that was applied.
    pub async fn reconcile(&self, change: &UserChange) -> Result<Action, AppError> {
        let action = decide(&change.before, &change.after);
        self.apply(&change.id, &action).await?;
        Ok(action)
    }

    async fn apply(&self, id: &UserId, action: &Action) -> Result<(), AppError> {
        match action {
            Action::Create(profile) => {
                tracing::info!(user_id = %id, "User promoted to barber, creating profile");
                self.barbers.upsert(id, profile).await?;
            }
            Action::Delete => {
                tracing::info!(user_id = %id, "User demoted from barber, deleting profile");
                self.barbers.delete(id).await?;
            }
            Action::NoOp(NoOpReason::RoleUnchanged) => {
                tracing::debug!(user_id = %id, "Role unchanged, nothing to do");
            }
            Action::NoOp(NoOpReason::NotBarberTransition) => {
                tracing::debug!(user_id = %id, "Role change does not involve barber");
            }
        }
        Ok(())
    }
}
