#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use farmstead_domain::id::{CategoryId, OrderId, UserId};
use farmstead_domain::order::OrderCollection;
use farmstead_domain::user::UserRole;

use crate::domain::types::{Order, OutgoingEmail, UserProfile};
use crate::error::BackofficeError;

/// Repository for user profile documents.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, BackofficeError>;

    /// Insert a new profile. When a row with the same id already exists it
    /// is kept as is and the call still succeeds.
    async fn create(&self, profile: &UserProfile) -> Result<(), BackofficeError>;

    /// Merge email, role and `updated_at` into an existing profile.
    /// `disabled` and `created_at` are left untouched.
    async fn merge_sync(
        &self,
        id: &UserId,
        email: Option<&str>,
        role: Option<UserRole>,
        updated_at: DateTime<Utc>,
    ) -> Result<(), BackofficeError>;

    /// Merge `disabled` and `updated_at`. A missing profile stays missing.
    async fn set_disabled(
        &self,
        id: &UserId,
        disabled: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<(), BackofficeError>;

    async fn delete(&self, id: &UserId) -> Result<(), BackofficeError>;
}

/// Repository for stock categories and their items.
pub trait CategoryRepository: Send + Sync {
    /// Ids of all stock items whose `category_id` equals `category_id`.
    async fn find_item_ids(&self, category_id: &CategoryId)
    -> Result<Vec<String>, BackofficeError>;

    /// Delete the given items and the category in one atomic batch.
    async fn delete_batch(
        &self,
        category_id: &CategoryId,
        item_ids: &[String],
    ) -> Result<(), BackofficeError>;
}

/// Repository for egg and livestock orders.
pub trait OrderRepository: Send + Sync {
    async fn find(
        &self,
        collection: OrderCollection,
        id: &OrderId,
    ) -> Result<Option<Order>, BackofficeError>;

    /// Set only `dispatch_email_sent_at`; every other field is left as is.
    async fn mark_dispatch_email_sent(
        &self,
        collection: OrderCollection,
        id: &OrderId,
        sent_at: DateTime<Utc>,
    ) -> Result<(), BackofficeError>;
}

/// Port for the external identity provider (user directory).
pub trait IdentityProviderPort: Send + Sync {
    /// Create an account. Returns the provider-assigned uid.
    async fn create_user(&self, email: &str, password: &str) -> Result<UserId, BackofficeError>;

    /// Attach the role custom claim to an account.
    async fn set_role_claim(&self, uid: &UserId, role: UserRole) -> Result<(), BackofficeError>;

    async fn set_disabled(&self, uid: &UserId, disabled: bool) -> Result<(), BackofficeError>;

    async fn delete_user(&self, uid: &UserId) -> Result<(), BackofficeError>;
}

/// Port for the transactional email provider.
pub trait EmailSender: Send + Sync {
    /// Send one email. Returns the provider's message id, if it reports one.
    async fn send(&self, email: &OutgoingEmail) -> Result<Option<String>, BackofficeError>;
}
