//! Newtype wrappers for document identifiers.
//!
//! Ids are opaque strings assigned by the document store or identity provider.
//! Parsing trims surrounding whitespace and rejects blank input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when an id is empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("id must not be blank")]
pub struct BlankId;

fn non_blank(s: &str) -> Result<String, BlankId> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(BlankId);
    }
    Ok(trimmed.to_owned())
}

/// Identifies a user account (identity-provider uid, also the profile id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = BlankId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(non_blank(s)?))
    }
}

/// Identifies a stock category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CategoryId {
    type Err = BlankId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(non_blank(s)?))
    }
}

/// Identifies an order within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderId {
    type Err = BlankId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(non_blank(s)?))
    }
}
