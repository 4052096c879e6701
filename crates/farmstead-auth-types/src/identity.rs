//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::request::Parts;

use farmstead_core::error::Unauthenticated;
use farmstead_domain::id::UserId;

/// Verified uid of the caller.
pub const X_FARMSTEAD_USER_ID: &str = "x-farmstead-user-id";
/// Email from the caller's token, if the token carries one.
pub const X_FARMSTEAD_USER_EMAIL: &str = "x-farmstead-user-email";
/// Raw custom role claim, if one has been attached to the identity.
pub const X_FARMSTEAD_USER_ROLE: &str = "x-farmstead-user-role";

/// Caller identity injected by the gateway after token verification.
///
/// Rejects with `unauthenticated` if `x-farmstead-user-id` is absent or blank.
/// The role claim is passed through raw; [`crate::role::RoleResolver`] decides
/// what it means.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub uid: UserId,
    pub email: Option<String>,
    pub role_claim: Option<String>,
}

fn header_str(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Unauthenticated;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let uid = header_str(parts, X_FARMSTEAD_USER_ID).and_then(|s| s.parse::<UserId>().ok());
        let email = header_str(parts, X_FARMSTEAD_USER_EMAIL);
        let role_claim = header_str(parts, X_FARMSTEAD_USER_ROLE);

        async move {
            let uid = uid.ok_or(Unauthenticated)?;
            Ok(Self {
                uid,
                email,
                role_claim,
            })
        }
    }
}
