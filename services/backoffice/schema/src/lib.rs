//! sea-orm entities for the backoffice document store.
//!
//! Each collection is a table keyed by a text document id.

pub mod egg_orders;
pub mod livestock_orders;
pub mod stock_categories;
pub mod stock_items;
pub mod user_profiles;
