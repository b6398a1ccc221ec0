//! Core module: configuration and its errors

pub mod config;
pub mod error;

pub use config::{default_config_path, RulesConfig};
pub use error::{CoreError, CoreResult};
