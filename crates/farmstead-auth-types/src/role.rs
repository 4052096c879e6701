//! Role resolution and access guards.
//!
//! A caller's role comes from its custom role claim. Callers without a claim
//! can still be admins if their email is on the bootstrap allow-list, which is
//! how the first admin gets in before any claims exist.

use std::collections::HashSet;

use farmstead_domain::user::UserRole;

use crate::identity::CallerIdentity;

/// Returned by the guards when the resolved role is not permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{required} role required")]
pub struct AccessDenied {
    pub required: &'static str,
}

/// Resolves caller roles. Built once at startup from configuration.
#[derive(Debug, Clone, Default)]
pub struct RoleResolver {
    bootstrap_admins: HashSet<String>,
}

impl RoleResolver {
    /// Emails are compared trimmed and lower-cased.
    pub fn new<I, S>(bootstrap_admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bootstrap_admins = bootstrap_admins
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { bootstrap_admins }
    }

    pub fn bootstrap_admin_count(&self) -> usize {
        self.bootstrap_admins.len()
    }

    /// Resolve the caller's role.
    ///
    /// A present claim always wins and is mapped through the closed role set;
    /// an unrecognized claim yields `None` without consulting the allow-list.
    pub fn resolve(&self, caller: &CallerIdentity) -> Option<UserRole> {
        if let Some(claim) = caller.role_claim.as_deref() {
            let role = UserRole::from_claim(claim);
            if role.is_none() {
                tracing::warn!(uid = %caller.uid, claim, "unrecognized role claim");
            }
            return role;
        }
        let email = caller.email.as_deref()?.trim().to_lowercase();
        self.bootstrap_admins
            .contains(&email)
            .then_some(UserRole::Admin)
    }

    /// Permit `admin` and `super_admin`.
    pub fn require_admin(&self, caller: &CallerIdentity) -> Result<UserRole, AccessDenied> {
        self.resolve(caller)
            .filter(|r| r.is_admin())
            .ok_or(AccessDenied { required: "admin" })
    }

    /// Permit `admin`, `super_admin` and `worker`.
    pub fn require_staff(&self, caller: &CallerIdentity) -> Result<UserRole, AccessDenied> {
        self.resolve(caller)
            .filter(|r| r.is_staff())
            .ok_or(AccessDenied { required: "staff" })
    }
}
