use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use farmstead_auth_types::role::RoleResolver;
use farmstead_core::tracing::init_tracing;

use farmstead_backoffice::config::BackofficeConfig;
use farmstead_backoffice::infra::email::ResendMailer;
use farmstead_backoffice::infra::identity::HttpIdentityProvider;
use farmstead_backoffice::router::build_router;
use farmstead_backoffice::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = BackofficeConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = ResendMailer::from_api_key(config.resend_api_key, &config.resend_api_url);
    info!(enabled = mailer.is_some(), "email provider configured");

    let roles = RoleResolver::new(&config.bootstrap_admin_emails);
    info!(
        bootstrap_admins = roles.bootstrap_admin_count(),
        "role resolver ready"
    );

    let state = AppState {
        db,
        identity: HttpIdentityProvider::new(
            config.identity_admin_url,
            config.identity_admin_token,
        ),
        mailer,
        roles: Arc::new(roles),
        email_from: config.email_from,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("backoffice service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
