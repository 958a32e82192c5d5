pub mod config;
pub mod market;
pub mod modal;
pub mod profiles;
pub mod session;
