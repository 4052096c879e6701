use anyhow::{Context as _, anyhow};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::domain::repository::EmailSender;
use crate::domain::types::OutgoingEmail;
use crate::error::BackofficeError;

/// Resend email API client.
#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

impl ResendMailer {
    /// Build a mailer when an API key is available. `None` disables email.
    pub fn from_api_key(api_key: Option<String>, base_url: &str) -> Option<Self> {
        let api_key = api_key.filter(|k| !k.trim().is_empty())?;
        Some(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        })
    }
}

impl EmailSender for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Option<String>, BackofficeError> {
        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": email.from,
                "to": email.to,
                "subject": email.subject,
                "html": email.html,
            }))
            .send()
            .await
            .context("send email")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("email provider rejected message: {status}: {body}").into());
        }
        let sent: SendResponse = response.json().await.context("parse email response")?;
        Ok(sent.id)
    }
}
