use axum::{Json, extract::State};
use serde::Serialize;

use farmstead_auth_types::identity::CallerIdentity;
use farmstead_domain::user::UserRole;

use crate::error::BackofficeError;
use crate::state::AppState;
use crate::usecase::profile::{EnsureProfileInput, EnsureProfileUseCase};

// ── POST /rpc/ensureCurrentUserProfile ───────────────────────────────────────

#[derive(Serialize)]
pub struct EnsureProfileResponse {
    pub uid: String,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

pub async fn ensure_current_user_profile(
    identity: CallerIdentity,
    State(state): State<AppState>,
) -> Result<Json<EnsureProfileResponse>, BackofficeError> {
    let role = state.roles.resolve(&identity);
    let usecase = EnsureProfileUseCase {
        repo: state.profile_repo(),
    };
    let out = usecase
        .execute(EnsureProfileInput {
            uid: identity.uid,
            email: identity.email,
            role,
        })
        .await?;
    Ok(Json(EnsureProfileResponse {
        uid: out.uid.0,
        email: out.email,
        role: out.role,
    }))
}
