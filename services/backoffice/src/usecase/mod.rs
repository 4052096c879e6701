pub mod account;
pub mod category;
pub mod dispatch;
pub mod profile;
pub mod test_email;
