use chrono::Utc;

use farmstead_domain::id::UserId;
use farmstead_domain::user::UserRole;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::UserProfile;
use crate::error::BackofficeError;

// ── EnsureCurrentUserProfile ─────────────────────────────────────────────────

pub struct EnsureProfileInput {
    pub uid: UserId,
    pub email: Option<String>,
    /// Role resolved from the caller's claim or the bootstrap list.
    pub role: Option<UserRole>,
}

#[derive(Debug, PartialEq)]
pub struct EnsureProfileOutput {
    pub uid: UserId,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

pub struct EnsureProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> EnsureProfileUseCase<R> {
    pub async fn execute(
        &self,
        input: EnsureProfileInput,
    ) -> Result<EnsureProfileOutput, BackofficeError> {
        let now = Utc::now();
        let role = match self.repo.find_by_id(&input.uid).await? {
            None => {
                let profile = UserProfile {
                    id: input.uid.clone(),
                    email: input.email.clone(),
                    role: input.role,
                    disabled: false,
                    created_at: now,
                    updated_at: now,
                };
                self.repo.create(&profile).await?;
                tracing::info!(uid = %input.uid, "profile created");
                input.role
            }
            Some(existing) => {
                let role = input.role.or(existing.role);
                self.repo
                    .merge_sync(&input.uid, input.email.as_deref(), role, now)
                    .await?;
                role
            }
        };
        Ok(EnsureProfileOutput {
            uid: input.uid,
            email: input.email,
            role,
        })
    }
}
