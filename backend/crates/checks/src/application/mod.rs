//! Application Layer
//!
//! Request coordination and configuration.

pub mod config;
pub mod coordinator;

// Re-exports
pub use config::ChecksConfig;
pub use coordinator::{DefaultCoordinator, RequestCoordinator};
