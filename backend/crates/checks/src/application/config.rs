//! Application Configuration
//!
//! Configuration for the checks application layer.

use crate::domain::services::CredentialPolicy;

/// Default redirect target after an accepted login
pub const DEFAULT_LOGIN_REDIRECT: &str = "/triangle";

/// Triangle page of the frontend dev server
pub const DEV_LOGIN_REDIRECT: &str = "http://localhost:40922/triangle";

/// Checks application configuration
#[derive(Debug, Clone)]
pub struct ChecksConfig {
    /// Credential format rules
    pub credential_policy: CredentialPolicy,
    /// Where `POST /login` sends the client on success
    pub login_redirect: String,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            credential_policy: CredentialPolicy::default(),
            login_redirect: DEFAULT_LOGIN_REDIRECT.to_string(),
        }
    }
}

impl ChecksConfig {
    /// Create config for development (frontend served by its own dev server)
    pub fn development() -> Self {
        Self {
            login_redirect: DEV_LOGIN_REDIRECT.to_string(),
            ..Default::default()
        }
    }

    /// Override the post-login redirect target
    pub fn with_login_redirect(mut self, path: impl Into<String>) -> Self {
        self.login_redirect = path.into();
        self
    }
}
