//! Domain model for holder records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Deletion is represented by soft-delete tombstones, not hard delete.

pub mod holder;
