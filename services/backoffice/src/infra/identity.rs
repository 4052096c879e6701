use anyhow::{Context as _, anyhow};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use farmstead_domain::id::UserId;
use farmstead_domain::user::UserRole;

use crate::domain::repository::IdentityProviderPort;
use crate::error::BackofficeError;

/// Identity provider admin API over HTTP, authenticated with a bearer token.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct CreateUserResponse {
    uid: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    fn user_url(&self, uid: &UserId) -> String {
        format!("{}/users/{}", self.base_url, uid)
    }
}

/// Map provider status codes onto service errors. 2xx passes through.
async fn check_status(response: Response, operation: &str) -> Result<Response, BackofficeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status {
        StatusCode::CONFLICT => Err(BackofficeError::EmailAlreadyExists),
        StatusCode::NOT_FOUND => Err(BackofficeError::UserNotFound),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(anyhow!("identity provider {operation} failed: {status}: {body}").into())
        }
    }
}

impl IdentityProviderPort for HttpIdentityProvider {
    async fn create_user(&self, email: &str, password: &str) -> Result<UserId, BackofficeError> {
        let response = self
            .client
            .post(format!("{}/users", self.base_url))
            .bearer_auth(&self.token)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .context("identity provider create user")?;
        let created: CreateUserResponse = check_status(response, "create user")
            .await?
            .json()
            .await
            .context("parse identity provider create user response")?;
        Ok(UserId(created.uid))
    }

    async fn set_role_claim(&self, uid: &UserId, role: UserRole) -> Result<(), BackofficeError> {
        let response = self
            .client
            .put(format!("{}/claims", self.user_url(uid)))
            .bearer_auth(&self.token)
            .json(&json!({ "role": role }))
            .send()
            .await
            .context("identity provider set role claim")?;
        check_status(response, "set role claim").await?;
        Ok(())
    }

    async fn set_disabled(&self, uid: &UserId, disabled: bool) -> Result<(), BackofficeError> {
        let response = self
            .client
            .patch(self.user_url(uid))
            .bearer_auth(&self.token)
            .json(&json!({ "disabled": disabled }))
            .send()
            .await
            .context("identity provider set disabled")?;
        check_status(response, "set disabled").await?;
        Ok(())
    }

    async fn delete_user(&self, uid: &UserId) -> Result<(), BackofficeError> {
        let response = self
            .client
            .delete(self.user_url(uid))
            .bearer_auth(&self.token)
            .send()
            .await
            .context("identity provider delete user")?;
        check_status(response, "delete user").await?;
        Ok(())
    }
}
