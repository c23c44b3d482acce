//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repository records every call it receives so tests can assert on
//! exactly which store operations a change produced.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
