//! Application configuration.
//!
//! Loaded once at startup from `config.toml`; every section and field is
//! optional.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AppConfig, LoggingConfig, StoreConfig, TimingConfig};
