use farmstead_core::config::{optional, parse_or, required, split_list};

pub const DEFAULT_PORT: u16 = 3114;
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_EMAIL_FROM: &str = "Farmstead <orders@farmstead.example>";

/// Backoffice service configuration loaded from environment variables.
#[derive(Debug)]
pub struct BackofficeConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `BACKOFFICE_PORT`.
    pub port: u16,
    /// Base URL of the identity provider admin API.
    pub identity_admin_url: String,
    /// Bearer token for the identity provider admin API.
    pub identity_admin_token: String,
    /// Email provider API key. `None` disables the email operations.
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    /// Sender used for dispatch emails and as the test email default.
    pub email_from: String,
    /// Emails treated as admin when the caller carries no role claim.
    pub bootstrap_admin_emails: Vec<String>,
}

impl BackofficeConfig {
    pub fn from_env() -> Self {
        let key_file = optional("RESEND_API_KEY_FILE").and_then(|path| {
            std::fs::read_to_string(&path)
                .inspect_err(|e| tracing::warn!(path = %path, error = %e, "unreadable api key file"))
                .ok()
        });
        Self {
            database_url: required("DATABASE_URL"),
            port: parse_or("BACKOFFICE_PORT", DEFAULT_PORT),
            identity_admin_url: required("IDENTITY_ADMIN_URL"),
            identity_admin_token: required("IDENTITY_ADMIN_TOKEN"),
            resend_api_key: resolve_api_key(optional("RESEND_API_KEY"), key_file),
            resend_api_url: optional("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_owned()),
            email_from: optional("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_owned()),
            bootstrap_admin_emails: optional("BOOTSTRAP_ADMIN_EMAILS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
        }
    }
}

/// Pick the email API key: the env value first, then the secret file.
/// Values are trimmed; blank counts as absent.
pub fn resolve_api_key(env_value: Option<String>, file_value: Option<String>) -> Option<String> {
    [env_value, file_value]
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_owned())
        .find(|v| !v.is_empty())
}
