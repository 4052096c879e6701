use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use farmstead_auth_types::identity::CallerIdentity;

use crate::error::BackofficeError;
use crate::state::AppState;
use crate::usecase::category::DeleteCategoryWithItemsUseCase;

// ── POST /rpc/deleteCategoryWithItems ────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteCategoryRequest {
    pub category_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCategoryResponse {
    pub deleted_items: usize,
}

pub async fn delete_category_with_items(
    identity: CallerIdentity,
    State(state): State<AppState>,
    body: Result<Json<DeleteCategoryRequest>, JsonRejection>,
) -> Result<Json<DeleteCategoryResponse>, BackofficeError> {
    state.roles.require_admin(&identity)?;
    let Json(body) = body?;
    let usecase = DeleteCategoryWithItemsUseCase {
        repo: state.category_repo(),
    };
    let deleted_items = usecase.execute(&body.category_id).await?;
    Ok(Json(DeleteCategoryResponse { deleted_items }))
}
