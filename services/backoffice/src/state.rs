use std::sync::Arc;

use sea_orm::DatabaseConnection;

use farmstead_auth_types::role::RoleResolver;

use crate::infra::db::{DbCategoryRepository, DbOrderRepository, DbProfileRepository};
use crate::infra::email::ResendMailer;
use crate::infra::identity::HttpIdentityProvider;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: HttpIdentityProvider,
    /// `None` when no email API key is configured.
    pub mailer: Option<ResendMailer>,
    pub roles: Arc<RoleResolver>,
    /// Sender for dispatch emails and default sender for test emails.
    pub email_from: String,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }
}
