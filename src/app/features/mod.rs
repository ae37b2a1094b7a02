pub mod account;
pub mod organization;
pub mod platform;
