use chrono::{DateTime, Utc};
use serde::Deserialize;

use farmstead_domain::id::{OrderId, UserId};
use farmstead_domain::order::{OrderCollection, OrderItem};
use farmstead_domain::user::UserRole;

/// Profile record mirroring an identity-provider account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An egg or livestock order, as far as dispatch notices care.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub collection: OrderCollection,
    pub id: OrderId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub order_number: Option<String>,
    pub send_date: Option<String>,
    pub delivery_option: Option<String>,
    pub tracking_link: Option<String>,
    pub items: Vec<OrderItem>,
    pub dispatch_email_sent_at: Option<DateTime<Utc>>,
}

/// A single HTML email handed to the email provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Recipient field of a test email: one address or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    /// A single recipient becomes a one-element list.
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::One(to) => vec![to],
            Self::Many(to) => to,
        }
    }
}

/// Role given to accounts created without an explicit role.
pub const DEFAULT_NEW_USER_ROLE: UserRole = UserRole::Worker;

/// Temporary password shape: prefix + random `[0-9a-z]` tail + suffix.
pub const TEMP_PASSWORD_PREFIX: &str = "Temp";
pub const TEMP_PASSWORD_RANDOM_LEN: usize = 8;
pub const TEMP_PASSWORD_SUFFIX: &str = "!";

/// Display name used when an order has neither name nor surname.
pub const FALLBACK_CUSTOMER_NAME: &str = "Customer";

pub const DEFAULT_TEST_EMAIL_SUBJECT: &str = "Farmstead test email";
pub const DEFAULT_TEST_EMAIL_HTML: &str = "<p>This is a test email from Farmstead.</p>";
