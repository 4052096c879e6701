use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use farmstead_auth_types::identity::CallerIdentity;

use crate::domain::types::Recipients;
use crate::error::BackofficeError;
use crate::state::AppState;
use crate::usecase::dispatch::{SendDispatchEmailInput, SendDispatchEmailUseCase};
use crate::usecase::test_email::{SendTestEmailInput, SendTestEmailUseCase};

#[derive(Serialize)]
pub struct SendEmailResponse {
    /// Provider message id, `null` if the provider returned none.
    pub id: Option<String>,
}

// ── POST /rpc/sendDispatchEmail ──────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SendDispatchEmailRequest {
    pub collection_name: String,
    pub order_id: String,
}

pub async fn send_dispatch_email(
    identity: CallerIdentity,
    State(state): State<AppState>,
    body: Result<Json<SendDispatchEmailRequest>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, BackofficeError> {
    state.roles.require_staff(&identity)?;
    let Json(body) = body?;
    let usecase = SendDispatchEmailUseCase {
        orders: state.order_repo(),
        mailer: state.mailer.clone(),
        from: state.email_from.clone(),
    };
    let id = usecase
        .execute(SendDispatchEmailInput {
            collection_name: body.collection_name,
            order_id: body.order_id,
        })
        .await?;
    Ok(Json(SendEmailResponse { id }))
}

// ── POST /rpc/sendTestEmail ──────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SendTestEmailRequest {
    pub to: Option<Recipients>,
    pub subject: Option<String>,
    pub html: Option<String>,
    pub from: Option<String>,
}

pub async fn send_test_email(
    identity: CallerIdentity,
    State(state): State<AppState>,
    body: Result<Json<SendTestEmailRequest>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, BackofficeError> {
    state.roles.require_admin(&identity)?;
    let Json(body) = body?;
    let usecase = SendTestEmailUseCase {
        mailer: state.mailer.clone(),
        default_from: state.email_from.clone(),
    };
    let id = usecase
        .execute(SendTestEmailInput {
            to: body.to,
            subject: body.subject,
            html: body.html,
            from: body.from,
        })
        .await?;
    Ok(Json(SendEmailResponse { id }))
}
