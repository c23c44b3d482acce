//! SeaORM entities
//!
//! Table models for the PostgreSQL adapters. Domain code never sees these directly.

pub mod barbers;
