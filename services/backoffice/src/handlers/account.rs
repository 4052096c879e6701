use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use farmstead_auth_types::identity::CallerIdentity;

use crate::error::BackofficeError;
use crate::state::AppState;
use crate::usecase::account::{
    CreateAuthUserInput, CreateAuthUserUseCase, DeleteAuthUserUseCase, UpdateAuthUserStatusInput,
    UpdateAuthUserStatusUseCase,
};

// ── POST /rpc/createAuthUser ─────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateAuthUserRequest {
    pub email: String,
    pub role: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthUserResponse {
    pub uid: String,
    pub temporary_password: Option<String>,
}

pub async fn create_auth_user(
    identity: CallerIdentity,
    State(state): State<AppState>,
    body: Result<Json<CreateAuthUserRequest>, JsonRejection>,
) -> Result<Json<CreateAuthUserResponse>, BackofficeError> {
    state.roles.require_admin(&identity)?;
    let Json(body) = body?;
    let usecase = CreateAuthUserUseCase {
        identity: state.identity.clone(),
        profiles: state.profile_repo(),
    };
    let out = usecase
        .execute(CreateAuthUserInput {
            email: body.email,
            role: body.role,
            password: body.password,
        })
        .await?;
    Ok(Json(CreateAuthUserResponse {
        uid: out.uid.0,
        temporary_password: out.temporary_password,
    }))
}

// ── POST /rpc/updateAuthUserStatus ───────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateAuthUserStatusRequest {
    pub uid: String,
    pub disabled: Option<bool>,
}

#[derive(Serialize)]
pub struct UpdateAuthUserStatusResponse {
    pub uid: String,
    pub disabled: bool,
}

pub async fn update_auth_user_status(
    identity: CallerIdentity,
    State(state): State<AppState>,
    body: Result<Json<UpdateAuthUserStatusRequest>, JsonRejection>,
) -> Result<Json<UpdateAuthUserStatusResponse>, BackofficeError> {
    state.roles.require_admin(&identity)?;
    let Json(body) = body?;
    let usecase = UpdateAuthUserStatusUseCase {
        identity: state.identity.clone(),
        profiles: state.profile_repo(),
    };
    let out = usecase
        .execute(UpdateAuthUserStatusInput {
            uid: body.uid,
            disabled: body.disabled,
        })
        .await?;
    Ok(Json(UpdateAuthUserStatusResponse {
        uid: out.uid.0,
        disabled: out.disabled,
    }))
}

// ── POST /rpc/deleteAuthUser ─────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct DeleteAuthUserRequest {
    pub uid: String,
}

#[derive(Serialize)]
pub struct DeleteAuthUserResponse {
    pub uid: String,
}

pub async fn delete_auth_user(
    identity: CallerIdentity,
    State(state): State<AppState>,
    body: Result<Json<DeleteAuthUserRequest>, JsonRejection>,
) -> Result<Json<DeleteAuthUserResponse>, BackofficeError> {
    state.roles.require_admin(&identity)?;
    let Json(body) = body?;
    let usecase = DeleteAuthUserUseCase {
        identity: state.identity.clone(),
        profiles: state.profile_repo(),
    };
    let uid = usecase.execute(&body.uid).await?;
    Ok(Json(DeleteAuthUserResponse { uid: uid.0 }))
}
