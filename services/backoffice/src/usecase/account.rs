use chrono::Utc;
use rand::RngExt;

use farmstead_domain::id::UserId;
use farmstead_domain::user::UserRole;

use crate::domain::repository::{IdentityProviderPort, ProfileRepository};
use crate::domain::types::{
    DEFAULT_NEW_USER_ROLE, TEMP_PASSWORD_PREFIX, TEMP_PASSWORD_RANDOM_LEN, TEMP_PASSWORD_SUFFIX,
    UserProfile,
};
use crate::error::BackofficeError;

/// Charset for the random part of temporary passwords.
const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn generate_temporary_password() -> String {
    let mut rng = rand::rng();
    let tail: String = (0..TEMP_PASSWORD_RANDOM_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    format!("{TEMP_PASSWORD_PREFIX}{tail}{TEMP_PASSWORD_SUFFIX}")
}

fn parse_uid(raw: &str) -> Result<UserId, BackofficeError> {
    raw.parse().map_err(|_| BackofficeError::MissingUid)
}

// ── CreateAuthUser ───────────────────────────────────────────────────────────

pub struct CreateAuthUserInput {
    pub email: String,
    pub role: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct CreateAuthUserOutput {
    pub uid: UserId,
    /// Set only when the password was generated here.
    pub temporary_password: Option<String>,
}

pub struct CreateAuthUserUseCase<I, R>
where
    I: IdentityProviderPort,
    R: ProfileRepository,
{
    pub identity: I,
    pub profiles: R,
}

impl<I, R> CreateAuthUserUseCase<I, R>
where
    I: IdentityProviderPort,
    R: ProfileRepository,
{
    pub async fn execute(
        &self,
        input: CreateAuthUserInput,
    ) -> Result<CreateAuthUserOutput, BackofficeError> {
        let email = input.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(BackofficeError::MissingEmail);
        }
        let role = match input.role.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_NEW_USER_ROLE,
            Some(raw) => raw
                .parse::<UserRole>()
                .map_err(|e| BackofficeError::InvalidRole(e.0))?,
        };
        let supplied = input.password.filter(|p| !p.trim().is_empty());
        let temporary_password = supplied
            .is_none()
            .then(generate_temporary_password);
        let password = supplied
            .as_deref()
            .or(temporary_password.as_deref())
            .unwrap_or_default();

        let uid = self.identity.create_user(&email, password).await?;

        if let Err(e) = self.identity.set_role_claim(&uid, role).await {
            tracing::error!(uid = %uid, completed = "identity created", error = %e, "create user half-applied");
            return Err(e);
        }

        let now = Utc::now();
        let profile = UserProfile {
            id: uid.clone(),
            email: Some(email),
            role: Some(role),
            disabled: false,
            created_at: now,
            updated_at: now,
        };
        if let Err(e) = self.profiles.create(&profile).await {
            tracing::error!(uid = %uid, completed = "identity created with role claim", error = %e, "create user half-applied");
            return Err(e);
        }

        tracing::info!(uid = %uid, role = %role, "user created");
        Ok(CreateAuthUserOutput {
            uid,
            temporary_password,
        })
    }
}

// ── UpdateAuthUserStatus ─────────────────────────────────────────────────────

pub struct UpdateAuthUserStatusInput {
    pub uid: String,
    /// Required; there is no default status.
    pub disabled: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub struct UpdateAuthUserStatusOutput {
    pub uid: UserId,
    pub disabled: bool,
}

pub struct UpdateAuthUserStatusUseCase<I, R>
where
    I: IdentityProviderPort,
    R: ProfileRepository,
{
    pub identity: I,
    pub profiles: R,
}

impl<I, R> UpdateAuthUserStatusUseCase<I, R>
where
    I: IdentityProviderPort,
    R: ProfileRepository,
{
    pub async fn execute(
        &self,
        input: UpdateAuthUserStatusInput,
    ) -> Result<UpdateAuthUserStatusOutput, BackofficeError> {
        let uid = parse_uid(&input.uid)?;
        let disabled = input.disabled.ok_or(BackofficeError::MissingDisabled)?;
        self.identity.set_disabled(&uid, disabled).await?;
        if let Err(e) = self
            .profiles
            .set_disabled(&uid, disabled, Utc::now())
            .await
        {
            tracing::error!(uid = %uid, completed = "identity status updated", error = %e, "status update half-applied");
            return Err(e);
        }
        tracing::info!(uid = %uid, disabled, "user status updated");
        Ok(UpdateAuthUserStatusOutput { uid, disabled })
    }
}

// ── DeleteAuthUser ───────────────────────────────────────────────────────────

pub struct DeleteAuthUserUseCase<I, R>
where
    I: IdentityProviderPort,
    R: ProfileRepository,
{
    pub identity: I,
    pub profiles: R,
}

impl<I, R> DeleteAuthUserUseCase<I, R>
where
    I: IdentityProviderPort,
    R: ProfileRepository,
{
    pub async fn execute(&self, uid: &str) -> Result<UserId, BackofficeError> {
        let uid = parse_uid(uid)?;
        self.identity.delete_user(&uid).await?;
        if let Err(e) = self.profiles.delete(&uid).await {
            tracing::error!(uid = %uid, completed = "identity deleted", error = %e, "delete user half-applied");
            return Err(e);
        }
        tracing::info!(uid = %uid, "user deleted");
        Ok(uid)
    }
}
