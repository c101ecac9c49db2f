//! Checks Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::ChecksConfig;
use crate::application::coordinator::RequestCoordinator;
use crate::domain::services::{BasicTriangleValidator, CredentialFormatChecker};
use crate::domain::validator::{CredentialValidator, TriangleValidator};
use crate::presentation::handlers::{self, ChecksAppState};

/// Create the checks router with the stock rules
pub fn checks_router(config: ChecksConfig) -> Router {
    let coordinator = RequestCoordinator::new(
        Arc::new(CredentialFormatChecker::new(config.credential_policy.clone())),
        Arc::new(BasicTriangleValidator),
    );

    checks_router_generic(coordinator, config)
}

/// Create a checks router around any pair of validators
pub fn checks_router_generic<C, T>(
    coordinator: RequestCoordinator<C, T>,
    config: ChecksConfig,
) -> Router
where
    C: CredentialValidator + 'static,
    T: TriangleValidator + 'static,
{
    let state = ChecksAppState {
        coordinator: Arc::new(coordinator),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::login_form))
        .route("/triangle", get(handlers::triangle_form))
        .route("/login", post(handlers::login::<C, T>))
        .route("/check-triangle", post(handlers::check_triangle::<C, T>))
        .fallback(handlers::not_found)
        .with_state(state)
}
