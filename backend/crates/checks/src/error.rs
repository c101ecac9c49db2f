//! Check Error Types
//!
//! Check-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Every variant is a user-facing,
//! recoverable rejection; the `Display` text is the message shown to the user.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Check-specific result type alias
///
/// `Ok` is the success outcome (with its payload, if any), `Err` the single
/// failure message. Never both, never neither.
pub type CheckResult<T> = Result<T, CheckError>;

/// Check-specific error variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Username is not exactly `length` alphabetic characters
    #[error("Username must be exactly {length} alphabetic characters.")]
    InvalidUsername { length: usize },

    /// Password does not contain the required marker substring
    #[error("Password must contain \"{marker}\".")]
    MissingPasswordMarker { marker: String },

    /// At least one triangle side is zero or negative
    #[error("All numbers must be positive.")]
    NonPositiveSide,

    /// A side-length field could not be parsed as a number.
    /// Raised by the presentation layer, never by the rules themselves.
    #[error("Please enter valid numbers.")]
    InvalidNumber { field: &'static str },
}

impl CheckError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::InvalidUsername { .. }
            | CheckError::MissingPasswordMarker { .. }
            | CheckError::NonPositiveSide
            | CheckError::InvalidNumber { .. } => ErrorKind::BadRequest,
        }
    }

    /// Suggested next step for the user
    pub fn action(&self) -> &'static str {
        match self {
            CheckError::InvalidUsername { .. } | CheckError::MissingPasswordMarker { .. } => {
                "Please correct the credentials and submit again"
            }
            CheckError::NonPositiveSide | CheckError::InvalidNumber { .. } => {
                "Please enter three lengths greater than zero"
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string()).with_action(self.action())
    }

    // Rejections log at debug only.
    fn log(&self) {
        match self {
            CheckError::InvalidNumber { field } => {
                tracing::debug!(field = *field, "Unparseable side length");
            }
            _ => {
                tracing::debug!(error = %self, "Check rejected input");
            }
        }
    }
}

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
