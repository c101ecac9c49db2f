//! Presentation Layer
//!
//! HTTP handlers, form DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ChecksAppState;
pub use router::{checks_router, checks_router_generic};
