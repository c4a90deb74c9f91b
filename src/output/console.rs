//! Console output utilities.

use chrono::Local;
use console::style;

use crate::download::progress::Checkpoint;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Salesforce Backup                                 ║
║     Weekly data export downloader                     ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(user: &str, site: &str, data_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  User: {}", user);
    println!("  Site: {}", site);
    println!("  Directory: {}", data_dir);
    println!();
}

/// Print the export index as received.
pub fn print_urls(urls: &[String]) {
    println!("{}", style("All urls:").bold());
    for url in urls {
        println!("  {:?}", url);
    }
    println!();
}

/// Format a progress checkpoint line.
pub fn format_checkpoint(checkpoint: &Checkpoint, timestamp: &str) -> String {
    format!(
        "{}: {}% complete ({} of {})",
        timestamp, checkpoint.percent, checkpoint.bytes, checkpoint.total
    )
}

/// Print a progress checkpoint stamped with the local time.
pub fn print_checkpoint(checkpoint: &Checkpoint) {
    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S").to_string();
    println!("{}", format_checkpoint(checkpoint, &timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_checkpoint() {
        let checkpoint = Checkpoint {
            percent: 40,
            bytes: 409_600,
            total: 1_024_000,
        };
        assert_eq!(
            format_checkpoint(&checkpoint, "2024-03-09-02-15-00"),
            "2024-03-09-02-15-00: 40% complete (409600 of 1024000)"
        );
    }
}
