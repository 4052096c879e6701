//! Domain types shared across Farmstead services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` maps them to storage rows.

pub mod id;
pub mod order;
pub mod user;
