pub mod auth;
pub mod consts;
pub mod proxy;
pub mod types;
pub mod utils;
