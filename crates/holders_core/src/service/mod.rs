//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep CLI/caller layers decoupled from storage details.

pub mod holder_service;
