//! Checks Backend Module
//!
//! Two stateless input checks behind a thin coordinator:
//! - Credential format check (username shape, password marker)
//! - Triangle inequality check over three side lengths
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, validator traits, the concrete rules
//! - `application/` - Request coordinator and configuration
//! - `presentation/` - HTTP handlers, form DTOs, router
//!
//! ## Scope
//! The credential check is format validation only. Nothing is looked up,
//! hashed, stored or remembered between requests.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ChecksConfig;
pub use application::coordinator::{DefaultCoordinator, RequestCoordinator};
pub use domain::services::{BasicTriangleValidator, CredentialFormatChecker, CredentialPolicy};
pub use domain::validator::{CredentialValidator, TriangleValidator};
pub use error::{CheckError, CheckResult};
pub use presentation::router::{checks_router, checks_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
