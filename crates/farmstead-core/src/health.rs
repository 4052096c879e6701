use axum::http::StatusCode;

/// Handler for `GET /healthz`: liveness only, never touches dependencies.
///
/// Readiness depends on the service's own backends, so each service mounts
/// its own `/readyz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
