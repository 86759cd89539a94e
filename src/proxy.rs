pub mod client;
pub mod delete;
pub mod deploy;
