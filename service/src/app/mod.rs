//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod role_reconciler;

pub use role_reconciler::RoleReconciler;
