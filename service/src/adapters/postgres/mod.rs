//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod barber_repo;


pub use barber_repo::PostgresBarberRepository;
