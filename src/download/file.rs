//! Streaming an export archive to disk.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::ExportClient;
use crate::download::progress::{ProgressInterval, ProgressReporter};
use crate::error::{Error, Result};
use crate::output::print_checkpoint;

/// Bytes written between progress observations.
pub const CHUNK_SIZE: usize = 8192;

/// Download `url` into `output_path`, overwriting any previous content.
///
/// Returns the number of bytes written, or [`Error::SizeMismatch`] when that
/// differs from `expected_size`.
pub async fn download_file(
    client: &ExportClient,
    url: &str,
    output_path: &Path,
    expected_size: u64,
    interval: ProgressInterval,
) -> Result<u64> {
    let response = client.open_file(url).await?;

    let mut file = File::create(output_path).await?;
    let mut stream = response.bytes_stream();
    let mut reporter = ProgressReporter::new(expected_size, interval);
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        for piece in chunk.chunks(CHUNK_SIZE) {
            file.write_all(piece).await?;
            written += piece.len() as u64;

            for checkpoint in reporter.observe(written) {
                print_checkpoint(&checkpoint);
            }
        }
    }

    file.flush().await?;
    drop(file);

    tracing::debug!(
        "Wrote {} of {} expected bytes to {}",
        written,
        expected_size,
        output_path.display()
    );

    if written != expected_size {
        return Err(Error::SizeMismatch {
            expected: expected_size,
            actual: written,
        });
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{config_for, mount_part, part_url, session};
    use reqwest::Client;
    use tempfile::TempDir;
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_download_writes_whole_body() {
        let server = MockServer::start().await;
        let body: Vec<u8> = (0..50_000u32).map(|i| (i % 251) as u8).collect();
        mount_part(&server, "WE_1", body.len(), body.clone(), 1).await;

        let dir = TempDir::new().unwrap();
        let client = ExportClient::new(Client::new(), &config_for(&server, dir.path()), session());
        let target = dir.path().join("out.ZIP");

        let written = download_file(
            &client,
            &part_url("WE_1"),
            &target,
            body.len() as u64,
            ProgressInterval::default(),
        )
        .await
        .unwrap();

        assert_eq!(written, body.len() as u64);
        assert_eq!(std::fs::read(&target).unwrap(), body);
    }

    #[tokio::test]
    async fn test_short_body_is_size_mismatch() {
        let server = MockServer::start().await;
        mount_part(&server, "WE_1", 100, vec![1u8; 60], 1).await;

        let dir = TempDir::new().unwrap();
        let client = ExportClient::new(Client::new(), &config_for(&server, dir.path()), session());
        let target = dir.path().join("out.ZIP");

        let err = download_file(
            &client,
            &part_url("WE_1"),
            &target,
            100,
            ProgressInterval::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: 100,
                actual: 60
            }
        ));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_existing_file_is_truncated() {
        let server = MockServer::start().await;
        mount_part(&server, "WE_1", 3, b"new".to_vec(), 1).await;

        let dir = TempDir::new().unwrap();
        let client = ExportClient::new(Client::new(), &config_for(&server, dir.path()), session());
        let target = dir.path().join("out.ZIP");
        std::fs::write(&target, b"a much longer stale partial file").unwrap();

        download_file(&client, &part_url("WE_1"), &target, 3, ProgressInterval::default())
            .await
            .unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"new");
    }
}
