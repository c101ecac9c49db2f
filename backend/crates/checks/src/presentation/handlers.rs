//! HTTP Handlers

use axum::Form;
use axum::Json;
use axum::extract::State;
use axum::response::Redirect;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::config::ChecksConfig;
use crate::application::coordinator::RequestCoordinator;
use crate::domain::validator::{CredentialValidator, TriangleValidator};
use crate::domain::value_object::TriangleSides;
use crate::error::{CheckError, CheckResult};
use crate::presentation::dto::{FormDescription, LoginForm, TriangleCheckResponse, TriangleForm};

/// Shared state for check handlers
pub struct ChecksAppState<C, T>
where
    C: CredentialValidator + 'static,
    T: TriangleValidator + 'static,
{
    pub coordinator: Arc<RequestCoordinator<C, T>>,
    pub config: Arc<ChecksConfig>,
}

impl<C, T> Clone for ChecksAppState<C, T>
where
    C: CredentialValidator + 'static,
    T: TriangleValidator + 'static,
{
    fn clone(&self) -> Self {
        Self {
            coordinator: Arc::clone(&self.coordinator),
            config: Arc::clone(&self.config),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /
pub async fn login_form() -> Json<FormDescription> {
    Json(FormDescription::LOGIN)
}

/// POST /login
pub async fn login<C, T>(
    State(state): State<ChecksAppState<C, T>>,
    Form(form): Form<LoginForm>,
) -> CheckResult<Redirect>
where
    C: CredentialValidator + 'static,
    T: TriangleValidator + 'static,
{
    state.coordinator.login(form.username, form.password)?;

    Ok(Redirect::to(&state.config.login_redirect))
}

// ============================================================================
// Triangle
// ============================================================================

/// GET /triangle
pub async fn triangle_form() -> Json<FormDescription> {
    Json(FormDescription::TRIANGLE)
}

/// POST /check-triangle
pub async fn check_triangle<C, T>(
    State(state): State<ChecksAppState<C, T>>,
    Form(form): Form<TriangleForm>,
) -> CheckResult<Json<TriangleCheckResponse>>
where
    C: CredentialValidator + 'static,
    T: TriangleValidator + 'static,
{
    // Parse failures never reach the coordinator
    let sides = parse_sides(&form)?;

    let is_triangle = state
        .coordinator
        .check_triangle(sides.a, sides.b, sides.c)?;

    Ok(Json(TriangleCheckResponse {
        is_triangle,
        a: sides.a,
        b: sides.b,
        c: sides.c,
    }))
}

// ============================================================================
// Fallback
// ============================================================================

pub async fn not_found() -> AppError {
    AppError::not_found("No route for this request")
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse all three side fields, failing on the first unparseable one.
pub(crate) fn parse_sides(form: &TriangleForm) -> CheckResult<TriangleSides> {
    Ok(TriangleSides::new(
        parse_side("a", &form.a)?,
        parse_side("b", &form.b)?,
        parse_side("c", &form.c)?,
    ))
}

/// Surrounding whitespace is ignored and single `_` separators between
/// digits are dropped; anything else `f64::from_str` rejects is an error.
pub(crate) fn parse_side(field: &'static str, raw: &str) -> CheckResult<f64> {
    let invalid = || CheckError::InvalidNumber { field };
    let raw = raw.trim();

    if raw.contains('_') {
        let bytes = raw.as_bytes();
        let separated = bytes.iter().enumerate().all(|(i, &b)| {
            b != b'_'
                || (i > 0
                    && bytes[i - 1].is_ascii_digit()
                    && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
        });
        if !separated {
            return Err(invalid());
        }
        return raw.replace('_', "").parse::<f64>().map_err(|_| invalid());
    }

    raw.parse::<f64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(a: &str, b: &str, c: &str) -> TriangleForm {
        TriangleForm {
            a: a.to_string(),
            b: b.to_string(),
            c: c.to_string(),
        }
    }

    #[test]
    fn test_parse_side_accepts_numbers() {
        assert_eq!(parse_side("a", "3"), Ok(3.0));
        assert_eq!(parse_side("a", " 4.5 "), Ok(4.5));
        assert_eq!(parse_side("a", "-1"), Ok(-1.0));
        assert_eq!(parse_side("a", "1e2"), Ok(100.0));
    }

    #[test]
    fn test_parse_side_rejects_text() {
        for raw in ["", "   ", "abc", "3,5", "1 2", "0x10"] {
            assert_eq!(
                parse_side("b", raw),
                Err(CheckError::InvalidNumber { field: "b" }),
                "raw {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_side_digit_separators() {
        assert_eq!(parse_side("a", "1_000"), Ok(1000.0));
        assert_eq!(parse_side("a", "1_0.2_5"), Ok(10.25));
        assert_eq!(parse_side("a", "1e1_0"), Ok(1e10));
        for raw in ["_1", "1_", "1__0", "1_.5", "1._5", "_"] {
            assert_eq!(
                parse_side("c", raw),
                Err(CheckError::InvalidNumber { field: "c" }),
                "raw {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_sides_reports_first_bad_field() {
        assert_eq!(
            parse_sides(&form("3", "x", "y")),
            Err(CheckError::InvalidNumber { field: "b" })
        );
        assert_eq!(
            parse_sides(&form("3", "4", "5")),
            Ok(TriangleSides::new(3.0, 4.0, 5.0))
        );
    }
}
