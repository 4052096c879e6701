use axum::{
    Router,
    routing::{get, post},
};

use farmstead_core::health::healthz;
use farmstead_core::middleware::{request_id_layer, trace_layer};

use crate::handlers::{
    account::{create_auth_user, delete_auth_user, update_auth_user_status},
    category::delete_category_with_items,
    email::{send_dispatch_email, send_test_email},
    health::readyz,
    profile::ensure_current_user_profile,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Profiles
        .route(
            "/rpc/ensureCurrentUserProfile",
            post(ensure_current_user_profile),
        )
        // Accounts
        .route("/rpc/createAuthUser", post(create_auth_user))
        .route("/rpc/updateAuthUserStatus", post(update_auth_user_status))
        .route("/rpc/deleteAuthUser", post(delete_auth_user))
        // Stock
        .route(
            "/rpc/deleteCategoryWithItems",
            post(delete_category_with_items),
        )
        // Email
        .route("/rpc/sendDispatchEmail", post(send_dispatch_email))
        .route("/rpc/sendTestEmail", post(send_test_email))
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
