//! Per-file retry loop over the export index.

use std::path::Path;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tokio::time::sleep;

use crate::api::ExportClient;
use crate::config::Config;
use crate::download::file::download_file;
use crate::download::progress::ProgressInterval;
use crate::download::state::{FileOutcome, RunSummary};
use crate::error::Result;
use crate::fs::{archive_file_name, archive_path, local_size};
use crate::output::{print_error, print_info, print_success, print_warning};

/// Download every index entry in order, using today's date for file names.
///
/// A file that keeps failing is recorded and skipped over; only a fatal
/// error (an authentication failure) ends the run early.
pub async fn download_all(
    client: &ExportClient,
    config: &Config,
    urls: &[String],
) -> Result<RunSummary> {
    download_all_dated(client, config, urls, Local::now().date_naive()).await
}

/// [`download_all`] with an explicit date stamp for file names.
pub async fn download_all_dated(
    client: &ExportClient,
    config: &Config,
    urls: &[String],
    date: NaiveDate,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for url in urls {
        let outcome = download_with_retry(client, config, url, date).await?;
        summary.record(url, outcome);
    }

    Ok(summary)
}

/// Probe, skip-or-download, retrying the whole sequence on retryable errors.
pub async fn download_with_retry(
    client: &ExportClient,
    config: &Config,
    url: &str,
    date: NaiveDate,
) -> Result<FileOutcome> {
    if url.trim().is_empty() {
        print_warning("Skipping blank index entry");
        return Ok(FileOutcome::Blank);
    }

    let file_name = match archive_file_name(url, date) {
        Ok(name) => name,
        Err(e) => {
            print_error(&format!("Cannot name archive for {}: {}", url, e));
            return Ok(FileOutcome::Failed {
                attempts: 0,
                error: e.to_string(),
            });
        }
    };
    let path = archive_path(config, &file_name);
    let interval = ProgressInterval::from_config(config);

    let mut attempt = 0;
    loop {
        attempt += 1;
        print_info(&format!("Working on: {}", url));

        let result = attempt_once(client, url, &file_name, &path, interval).await;

        let err = match result {
            Ok(outcome) => return Ok(outcome),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => e,
        };

        print_error(&format!("Error: {}", err));

        if !err.is_retryable() {
            return Ok(FileOutcome::Failed {
                attempts: attempt,
                error: err.to_string(),
            });
        }

        if attempt >= config.max_attempts {
            print_error(&format!(
                "Giving up on {} after {} attempts",
                url, attempt
            ));
            return Ok(FileOutcome::Failed {
                attempts: attempt,
                error: err.to_string(),
            });
        }

        print_warning(&format!(
            "Retrying ({} of {})...",
            attempt + 1,
            config.max_attempts
        ));
        if config.retry_delay_seconds > 0 {
            sleep(Duration::from_secs(config.retry_delay_seconds)).await;
        }
    }
}

/// A local file is complete iff it is non-empty and matches the probed size.
pub fn is_complete(local_size: Option<u64>, expected_size: u64) -> bool {
    local_size.is_some_and(|size| size > 0 && size == expected_size)
}

/// One probe + skip-or-download pass.
async fn attempt_once(
    client: &ExportClient,
    url: &str,
    file_name: &str,
    path: &Path,
    interval: ProgressInterval,
) -> Result<FileOutcome> {
    let expected_size = client.probe_size(url).await?;
    print_info(&format!("Expected size: {}", expected_size));

    if is_complete(local_size(path)?, expected_size) {
        print_info(&format!(
            "File {} exists and is the right size. Skipping.",
            file_name
        ));
        return Ok(FileOutcome::Skipped {
            file_name: file_name.to_string(),
        });
    }

    print_info(&format!("Downloading {}...", file_name));
    let bytes = download_file(client, url, path, expected_size, interval).await?;
    print_success(&format!("Finished downloading {}!", file_name));

    Ok(FileOutcome::Downloaded {
        file_name: file_name.to_string(),
        bytes,
    })
}
