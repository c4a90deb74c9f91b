//! End-to-end backup run: login, index, downloads.

use reqwest::Client;

use crate::api::{login, ExportClient};
use crate::config::Config;
use crate::download::{download_all, RunSummary};
use crate::error::{Error, Result};
use crate::fs::ensure_dir;
use crate::output::{create_spinner, print_info, print_run_summary, print_urls};

/// Build the shared HTTP client.
///
/// No timeout is configured; the export servlet streams multi-gigabyte files.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))
}

/// Run one backup against a validated config.
///
/// Returns the run summary even when some files failed; only login, index
/// and fatal errors surface as `Err`.
pub async fn run_backup(config: &Config) -> Result<RunSummary> {
    let http = http_client()?;

    let spinner = create_spinner("Logging in...");
    let session = login(&http, config).await;
    spinner.finish_and_clear();
    let session = session?;
    tracing::info!("Logged in to org {}", session.organization_id);

    let client = ExportClient::new(http, config, session);

    let spinner = create_spinner("Downloading index...");
    let urls = client.fetch_index().await;
    spinner.finish_and_clear();
    let urls = urls?;
    print_urls(&urls);

    ensure_dir(&config.data_directory)?;

    let summary = download_all(&client, config, &urls).await?;
    print_run_summary(&summary);
    print_info("Done!");

    Ok(summary)
}
