//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod barber;
pub mod user;

// Constants re-exported for consumers and tests
#[allow(unused_imports)]
pub use barber::{BarberProfile, NewBarberProfile, WELCOME_BIO};
#[allow(unused_imports)]
pub use user::{RoleState, UserChange, UserId, UserSnapshot, BARBER_ROLE};
