//! Configuration file parsing for application metadata

pub mod app_toml;

pub use app_toml::{Config, ConfigError};
