//! API Server Entry Point
//!
//! Composition root: builds the two rules once, hands them to the
//! coordinator, and serves the checks router.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `checks::CheckError`, rendered as `kernel::error::AppError`.

use axum::http::{self, Method, header};
use checks::{
    BasicTriangleValidator, ChecksConfig, CredentialFormatChecker, RequestCoordinator,
    checks_router_generic,
};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,checks=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Checks configuration
    let mut config = if cfg!(debug_assertions) {
        ChecksConfig::development()
    } else {
        ChecksConfig::default()
    };
    if let Ok(path) = env::var("LOGIN_REDIRECT") {
        config = config.with_login_redirect(path);
    }

    // Rules are stateless; one instance of each serves every request
    let coordinator = RequestCoordinator::new(
        Arc::new(CredentialFormatChecker::new(config.credential_policy.clone())),
        Arc::new(BasicTriangleValidator),
    );

    tracing::info!(
        username_length = config.credential_policy.username_length,
        login_redirect = %config.login_redirect,
        "Checks configured"
    );

    // CORS configuration
    let frontend_origins =
        env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Build router
    let app = checks_router_generic(coordinator, config)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
