//! Core domain logic for repo-audit
//!
//! Business logic with no direct I/O. All interaction with the hosting API
//! is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RepositoryRecord`, `Violation`, `Report`)
//! - `services/` - Lister, validator, report builder and the audit pipeline
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
