//! User domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role carried by a user's custom claim and mirrored on the profile record.
///
/// Wire format: `"worker"`, `"admin"`, `"super_admin"`. The set is closed;
/// anything else is rejected by [`UserRole::from_claim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Worker,
    Admin,
    SuperAdmin,
}

/// Returned when a role string is outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl UserRole {
    /// Map a raw claim value to a role. Returns `None` for unknown values.
    pub fn from_claim(v: &str) -> Option<Self> {
        match v {
            "worker" => Some(Self::Worker),
            "admin" => Some(Self::Admin),
            "super_admin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    /// Convert to the wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// `admin` or `super_admin`.
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }

    /// `admin`, `super_admin` or `worker`.
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin | Self::Worker)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_claim(s).ok_or_else(|| UnknownRole(s.to_owned()))
    }
}
