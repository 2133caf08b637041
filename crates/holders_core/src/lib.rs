//! Core domain logic for holder record management.
//! This crate is the single source of truth for holder business rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::holder::{Holder, HolderId, HolderValidationError};
pub use repo::holder_repo::{HolderRepository, RepoError, RepoResult, SqliteHolderRepository};
pub use service::holder_service::{HolderService, HolderServiceError, ServiceResult};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
