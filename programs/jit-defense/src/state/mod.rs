//! Program state accounts

pub mod guard_config;
pub mod window_audit;

pub use guard_config::*;
pub use window_audit::*;
