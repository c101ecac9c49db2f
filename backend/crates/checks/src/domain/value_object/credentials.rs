//! Credentials Value Object
//!
//! A username/password pair exactly as submitted. Construction never fails:
//! whether the pair is acceptable is decided by a
//! [`CredentialValidator`](crate::domain::validator::CredentialValidator),
//! not by the type.

use std::fmt;

/// Submitted username/password pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
