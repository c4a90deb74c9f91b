//! Download module for export archives.
//!
//! This module provides:
//! - Progress checkpoint reporting
//! - Streaming a single archive to disk
//! - The per-file retry driver
//! - Run outcome tracking

pub mod driver;
pub mod file;
pub mod progress;
pub mod state;

pub use driver::{download_all, download_all_dated, download_with_retry, is_complete};
pub use file::download_file;
pub use progress::{Checkpoint, ProgressInterval, ProgressReporter};
pub use state::{FailedFile, FileOutcome, RunSummary};
