use crate::domain::repository::EmailSender;
use crate::domain::types::{
    DEFAULT_TEST_EMAIL_HTML, DEFAULT_TEST_EMAIL_SUBJECT, OutgoingEmail, Recipients,
};
use crate::error::BackofficeError;

// ── SendTestEmail ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct SendTestEmailInput {
    pub to: Option<Recipients>,
    pub subject: Option<String>,
    pub html: Option<String>,
    pub from: Option<String>,
}

pub struct SendTestEmailUseCase<M: EmailSender> {
    pub mailer: Option<M>,
    pub default_from: String,
}

impl<M: EmailSender> SendTestEmailUseCase<M> {
    /// Build the email, filling absent or blank fields with defaults.
    pub fn compose(&self, input: SendTestEmailInput) -> OutgoingEmail {
        let or_default = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        OutgoingEmail {
            from: or_default(input.from, self.default_from.as_str()),
            // The provider rejects the empty address; nothing is validated here.
            to: input
                .to
                .map(Recipients::into_list)
                .unwrap_or_else(|| vec![String::new()]),
            subject: or_default(input.subject, DEFAULT_TEST_EMAIL_SUBJECT),
            html: or_default(input.html, DEFAULT_TEST_EMAIL_HTML),
        }
    }

    pub async fn execute(
        &self,
        input: SendTestEmailInput,
    ) -> Result<Option<String>, BackofficeError> {
        let mailer = self
            .mailer
            .as_ref()
            .ok_or(BackofficeError::EmailNotConfigured)?;
        let email = self.compose(input);
        let id = mailer.send(&email).await?;
        tracing::info!(
            recipients = email.to.len(),
            message_id = id.as_deref().unwrap_or_default(),
            "test email sent"
        );
        Ok(id)
    }
}
