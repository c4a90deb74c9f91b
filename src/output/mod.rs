//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Spinners
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    format_checkpoint, print_banner, print_checkpoint, print_config_summary, print_error,
    print_info, print_success, print_urls, print_warning,
};
pub use progress::create_spinner;
pub use stats::print_run_summary;
