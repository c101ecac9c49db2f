//! Shared Kernel - cross-crate error vocabulary
//!
//! Everything the `checks` crate and the `api` binary need to agree on:
//! - The unified [`AppError`](error::app_error::AppError) and its result alias
//! - The [`ErrorKind`](error::kind::ErrorKind) classification mapped to HTTP status codes
//! - The problem-details HTTP response (feature `axum`)
//!
//! Keep this crate small. Anything domain specific belongs in the domain crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
