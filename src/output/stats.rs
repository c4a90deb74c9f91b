//! Statistics reporting.

use console::style;

use crate::download::RunSummary;

/// Print statistics for a finished run.
pub fn print_run_summary(summary: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Statistics:").bold());
    println!("  Downloaded: {}", summary.downloaded);
    println!("  Skipped:    {} (already complete)", summary.skipped);
    if summary.blank > 0 {
        println!("  Blank:      {} (empty index lines)", summary.blank);
    }
    println!("  Bytes:      {}", summary.bytes_downloaded);
    if summary.failed() > 0 {
        println!("  Failed:     {}", style(summary.failed()).red());
        for failure in &summary.failures {
            println!(
                "    {} ({} attempts): {}",
                failure.url, failure.attempts, failure.error
            );
        }
    }
    println!("{}", style("═".repeat(50)).dim());
}
