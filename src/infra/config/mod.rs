pub mod client_config;
pub mod config_store;

pub use client_config::{ClientConfig, ConfigError, ConfigFile, ConfigOverrides};
pub use config_store::TomlConfigStore;
