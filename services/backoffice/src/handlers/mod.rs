pub mod account;
pub mod category;
pub mod email;
pub mod health;
pub mod profile;
