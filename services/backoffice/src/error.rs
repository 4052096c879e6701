use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use farmstead_auth_types::role::AccessDenied;
use farmstead_core::error::{ErrorCode, error_response};

/// Backoffice service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum BackofficeError {
    #[error("{0}")]
    Forbidden(#[from] AccessDenied),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("email is required")]
    MissingEmail,
    #[error("unknown role: {0}")]
    InvalidRole(String),
    #[error("uid is required")]
    MissingUid,
    #[error("disabled is required")]
    MissingDisabled,
    #[error("categoryId is required")]
    MissingCategoryId,
    #[error("unknown order collection: {0}")]
    InvalidCollection(String),
    #[error("orderId is required")]
    MissingOrderId,
    #[error("email provider is not configured")]
    EmailNotConfigured,
    #[error("order has no customer email")]
    OrderMissingEmail,
    #[error("order not found")]
    OrderNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl BackofficeError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Forbidden(_) => "FORBIDDEN",
            Self::MissingEmail => "MISSING_EMAIL",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::MissingUid => "MISSING_UID",
            Self::MissingDisabled => "MISSING_DISABLED",
            Self::MissingCategoryId => "MISSING_CATEGORY_ID",
            Self::InvalidCollection(_) => "INVALID_COLLECTION",
            Self::MissingOrderId => "MISSING_ORDER_ID",
            Self::EmailNotConfigured => "EMAIL_NOT_CONFIGURED",
            Self::OrderMissingEmail => "ORDER_MISSING_EMAIL",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Forbidden(_) => ErrorCode::PermissionDenied,
            Self::InvalidBody(_)
            | Self::MissingEmail
            | Self::InvalidRole(_)
            | Self::MissingUid
            | Self::MissingDisabled
            | Self::MissingCategoryId
            | Self::InvalidCollection(_)
            | Self::MissingOrderId => ErrorCode::InvalidArgument,
            Self::EmailNotConfigured | Self::OrderMissingEmail => ErrorCode::FailedPrecondition,
            Self::OrderNotFound | Self::UserNotFound => ErrorCode::NotFound,
            Self::EmailAlreadyExists => ErrorCode::AlreadyExists,
            Self::Internal(_) => ErrorCode::Internal,
        }
    }
}

/// Malformed JSON, wrong field types and a missing JSON content type all map
/// to `invalid-argument`.
impl From<JsonRejection> for BackofficeError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for BackofficeError {
    fn into_response(self) -> Response {
        let cause = match &self {
            Self::Internal(e) => Some(format!("{e:#}")),
            _ => None,
        };
        error_response(
            self.code(),
            self.kind(),
            self.to_string(),
            cause.as_ref().map(|c| c as &dyn std::fmt::Display),
        )
    }
}
