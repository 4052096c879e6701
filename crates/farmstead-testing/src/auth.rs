//! Mock auth helpers for integration tests.
//!
//! Services behind the gateway receive `x-farmstead-user-*` headers injected by
//! the gateway. In tests, `MockAuth` produces these headers directly so no real
//! gateway or token is needed.

use http::{HeaderMap, HeaderName, HeaderValue};

use farmstead_auth_types::identity::{
    X_FARMSTEAD_USER_EMAIL, X_FARMSTEAD_USER_ID, X_FARMSTEAD_USER_ROLE,
};

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub uid: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl MockAuth {
    /// Identity with no email and no role claim.
    pub fn new(uid: &str) -> Self {
        Self {
            uid: uid.to_owned(),
            email: None,
            role: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_owned());
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_owned());
        self
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static(X_FARMSTEAD_USER_ID),
            HeaderValue::from_str(&self.uid).unwrap(),
        );
        if let Some(email) = &self.email {
            map.insert(
                HeaderName::from_static(X_FARMSTEAD_USER_EMAIL),
                HeaderValue::from_str(email).unwrap(),
            );
        }
        if let Some(role) = &self.role {
            map.insert(
                HeaderName::from_static(X_FARMSTEAD_USER_ROLE),
                HeaderValue::from_str(role).unwrap(),
            );
        }
        map
    }
}
