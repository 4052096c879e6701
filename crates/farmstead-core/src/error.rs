use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Caller-visible failure taxonomy shared by every handler.
///
/// Each service error maps onto exactly one code; the code decides the HTTP
/// status and the `code` field of the JSON error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Unauthenticated,
    PermissionDenied,
    InvalidArgument,
    FailedPrecondition,
    NotFound,
    AlreadyExists,
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::PermissionDenied => "permission-denied",
            Self::InvalidArgument => "invalid-argument",
            Self::FailedPrecondition => "failed-precondition",
            Self::NotFound => "not-found",
            Self::AlreadyExists => "already-exists",
            Self::Internal => "internal",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::FailedPrecondition => StatusCode::PRECONDITION_FAILED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Build the JSON error response `{code, kind, message}`.
///
/// Only `Internal` is logged here; tower-http `TraceLayer` already records
/// method/uri/status for every request and 4xx are expected client errors.
/// `cause` carries the underlying error chain for internal failures.
pub fn error_response(
    code: ErrorCode,
    kind: &str,
    message: String,
    cause: Option<&dyn std::fmt::Display>,
) -> Response {
    if code == ErrorCode::Internal {
        match cause {
            Some(e) => tracing::error!(error = %e, kind, "internal error"),
            None => tracing::error!(kind, "internal error"),
        }
    }
    let body = serde_json::json!({
        "code": code.as_str(),
        "kind": kind,
        "message": message,
    });
    (code.status(), axum::Json(body)).into_response()
}

/// Rejection for requests that carry no caller identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unauthenticated;

impl IntoResponse for Unauthenticated {
    fn into_response(self) -> Response {
        error_response(
            ErrorCode::Unauthenticated,
            "UNAUTHENTICATED",
            "authentication required".to_owned(),
            None,
        )
    }
}
