use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::errors::{DomainError, ErrorKind, FieldError};

pub type ApiResult<T> = Result<T, ApiProblem>;

const GENERIC_SERVER_ERROR: &str = "server error";

#[derive(Debug)]
pub struct ApiProblem {
    status: StatusCode,
    title: &'static str,
    detail: String,
    kind: &'static str,
    correlation_id: String,
    invalid_fields: Vec<FieldError>,
}

impl ApiProblem {
    /// Maps by `ErrorKind`. Persistence details are logged, never returned.
    pub fn from_domain(error: DomainError) -> Self {
        let problem = match error.kind() {
            ErrorKind::Validation => Self::new(
                StatusCode::BAD_REQUEST,
                "Validation failed",
                "https://dinopark.dev/problems/validation",
                error.message(),
            )
            .with_fields(error.field_errors().to_vec()),
            ErrorKind::Placement => Self::new(
                StatusCode::BAD_REQUEST,
                "Placement rejected",
                "https://dinopark.dev/problems/placement",
                error.message(),
            ),
            ErrorKind::NotFound => Self::new(
                StatusCode::NOT_FOUND,
                "Not found",
                "https://dinopark.dev/problems/not-found",
                error.message(),
            ),
            ErrorKind::Persistence => Self::internal(),
        };

        if problem.status.is_server_error() {
            error!(
                correlation_id = %problem.correlation_id,
                error = %error,
                "request failed"
            );
        } else {
            warn!(
                correlation_id = %problem.correlation_id,
                kind = error.kind().as_str(),
                error = %error,
                "request rejected"
            );
        }

        problem
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Bad request",
            "https://dinopark.dev/problems/bad-request",
            detail,
        )
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "https://dinopark.dev/problems/internal",
            GENERIC_SERVER_ERROR,
        )
    }

    fn new(
        status: StatusCode,
        title: &'static str,
        kind: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title,
            detail: detail.into(),
            kind,
            correlation_id: Uuid::new_v4().to_string(),
            invalid_fields: Vec::new(),
        }
    }

    fn with_fields(mut self, invalid_fields: Vec<FieldError>) -> Self {
        self.invalid_fields = invalid_fields;
        self
    }
}

#[derive(Debug, Serialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    status: u16,
    detail: String,
    correlation_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    invalid_fields: Vec<FieldError>,
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        let payload = ProblemDetails {
            kind: self.kind.to_string(),
            title: self.title.to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
            correlation_id: self.correlation_id,
            invalid_fields: self.invalid_fields,
        };

        let mut response = (self.status, Json(payload)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );

        response
    }
}
