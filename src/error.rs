use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A single field-level validation failure reported back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
    #[serde(rename = "rejectedValue")]
    pub rejected_value: Value,
}

impl Violation {
    pub fn new(field: &'static str, message: &'static str, rejected_value: Value) -> Self {
        Self {
            field,
            message,
            rejected_value,
        }
    }
}

/// Errors raised by the domain service. Mapped to HTTP exactly once, here,
/// via `IntoResponse`; the service itself never catches or suppresses them.
#[derive(Debug, Error)]
pub enum CinemaError {
    #[error("No movie with id: {0}")]
    MovieNotFound(u64),
    #[error("Less spaces than needed: requested {requested}, {available} free")]
    InsufficientCapacity { requested: u32, available: u32 },
    #[error("Request validation failed")]
    Validation(Vec<Violation>),
}

/// RFC 7807 style problem body.
#[derive(Serialize)]
struct Problem {
    #[serde(rename = "type")]
    problem_type: &'static str,
    title: &'static str,
    status: u16,
    detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<Violation>,
}

impl IntoResponse for CinemaError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        let (status, problem_type, title, violations) = match self {
            CinemaError::MovieNotFound(_) => {
                (StatusCode::NOT_FOUND, "cinema/not-found", "Not Found", Vec::new())
            }
            CinemaError::InsufficientCapacity { .. } => (
                StatusCode::BAD_REQUEST,
                "cinema/bad-reservation",
                "Not enough space",
                Vec::new(),
            ),
            CinemaError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "cinema/not-valid",
                "Validation Error",
                violations,
            ),
        };

        let problem = Problem {
            problem_type,
            title,
            status: status.as_u16(),
            detail,
            violations,
        };

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(problem),
        )
            .into_response()
    }
}
