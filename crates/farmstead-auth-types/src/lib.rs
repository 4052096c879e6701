//! Auth types shared across Farmstead services.
//!
//! Provides the `CallerIdentity` extractor, the role resolver and the
//! admin/staff access guards.

pub mod identity;
pub mod role;
