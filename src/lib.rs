//! Salesforce Backup - downloads the org's weekly data export archives.
//!
//! This library provides functionality for fetching Salesforce data export
//! files to local disk.
//!
//! # Features
//!
//! - SOAP partner login
//! - Export index retrieval
//! - Size-verified streaming downloads with progress checkpoints
//! - Per-file retry with skip-if-complete resume semantics
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use salesforce_backup::{run_backup, validate_config, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.yml"))?;
//!     validate_config(&config)?;
//!
//!     let summary = run_backup(&config).await?;
//!     println!("{} downloaded, {} failed", summary.downloaded, summary.failed());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod backup;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-exports for convenience
pub use api::{ExportClient, SessionCredentials};
pub use backup::run_backup;
pub use config::{validate_config, Config, ProgressMode};
pub use download::{download_all, FileOutcome, RunSummary};
pub use error::{Error, Result};
