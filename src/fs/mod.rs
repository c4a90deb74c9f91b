//! Filesystem module.
//!
//! Provides:
//! - Archive filename generation
//! - Data directory and local file helpers

pub mod naming;
pub mod paths;

pub use naming::{archive_file_name, extract_file_id, sanitize_path_component};
pub use paths::{archive_path, ensure_dir, local_size};
