//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Form entry points
// ============================================================================

/// Where and how a form is submitted, returned by the `GET` entry points
#[derive(Debug, Clone, Serialize)]
pub struct FormDescription {
    pub action: &'static str,
    pub method: &'static str,
    pub fields: &'static [&'static str],
}

impl FormDescription {
    pub const LOGIN: Self = Self {
        action: "/login",
        method: "POST",
        fields: &["username", "password"],
    };

    pub const TRIANGLE: Self = Self {
        action: "/check-triangle",
        method: "POST",
        fields: &["a", "b", "c"],
    };
}

// ============================================================================
// Login
// ============================================================================

/// Login form (`application/x-www-form-urlencoded`)
#[derive(Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Triangle
// ============================================================================

/// Triangle form. Sides arrive as raw text and are parsed by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct TriangleForm {
    pub a: String,
    pub b: String,
    pub c: String,
}

/// Triangle check response, echoing the parsed sides
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleCheckResponse {
    pub is_triangle: bool,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}
