//! Request Coordinator
//!
//! Thin dispatch from already-parsed request values to the two rules.
//! Holds shared handles to the rules and nothing else, so one instance
//! serves every request.

use std::sync::Arc;

use crate::domain::services::{BasicTriangleValidator, CredentialFormatChecker};
use crate::domain::validator::{CredentialValidator, TriangleValidator};
use crate::domain::value_object::{Credentials, TriangleSides};
use crate::error::CheckResult;

/// Coordinator wired with the stock rules
pub type DefaultCoordinator = RequestCoordinator<CredentialFormatChecker, BasicTriangleValidator>;

/// Request coordinator
pub struct RequestCoordinator<C, T>
where
    C: CredentialValidator,
    T: TriangleValidator,
{
    credential_validator: Arc<C>,
    triangle_validator: Arc<T>,
}

impl<C, T> RequestCoordinator<C, T>
where
    C: CredentialValidator,
    T: TriangleValidator,
{
    pub fn new(credential_validator: Arc<C>, triangle_validator: Arc<T>) -> Self {
        Self {
            credential_validator,
            triangle_validator,
        }
    }

    /// Check a submitted username/password pair.
    ///
    /// `Err` carries the message to redisplay. Navigation on success is up
    /// to the caller.
    pub fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> CheckResult<()> {
        let credentials = Credentials::new(username, password);

        self.credential_validator
            .check(&credentials)
            .inspect_err(|e| tracing::debug!(error = %e, "Login rejected"))?;

        tracing::info!(username = %credentials.username, "Login accepted");
        Ok(())
    }

    /// Check three side lengths.
    ///
    /// `Ok(is_triangle)` for positive input, `Err(NonPositiveSide)` otherwise.
    pub fn check_triangle(&self, a: f64, b: f64, c: f64) -> CheckResult<bool> {
        let sides = TriangleSides::new(a, b, c);

        let is_triangle = self
            .triangle_validator
            .check(&sides)
            .inspect_err(|e| tracing::debug!(%sides, error = %e, "Triangle check rejected"))?;

        tracing::debug!(%sides, is_triangle, "Triangle checked");
        Ok(is_triangle)
    }
}

impl<C, T> Clone for RequestCoordinator<C, T>
where
    C: CredentialValidator,
    T: TriangleValidator,
{
    fn clone(&self) -> Self {
        Self {
            credential_validator: Arc::clone(&self.credential_validator),
            triangle_validator: Arc::clone(&self.triangle_validator),
        }
    }
}

impl Default for DefaultCoordinator {
    fn default() -> Self {
        Self::new(
            Arc::new(CredentialFormatChecker::default()),
            Arc::new(BasicTriangleValidator),
        )
    }
}
