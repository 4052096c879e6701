//! Cross-cutting service plumbing shared by Farmstead services.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
