//! Domain Layer
//!
//! Value objects, validator traits and the concrete rules.

pub mod services;
pub mod validator;
pub mod value_object;

// Re-exports
pub use services::{BasicTriangleValidator, CredentialFormatChecker, CredentialPolicy};
pub use validator::{CredentialValidator, TriangleValidator};
pub use value_object::{credentials::Credentials, triangle_sides::TriangleSides};
