//! Configuration module for salesforce-backup.
//!
//! This module handles:
//! - Loading configuration from YAML (or TOML) files
//! - Progress mode selection
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use modes::ProgressMode;
pub use validation::validate_config;
