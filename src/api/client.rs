//! Export servlet HTTP client.

use reqwest::{header, Client, Response, StatusCode};

use crate::api::session::SessionCredentials;
use crate::config::Config;
use crate::error::{Error, Result};

/// Path of the weekly export servlet, relative to the site.
const EXPORT_INDEX_PATH: &str = "/servlet/servlet.OrgExport";

/// Authenticated client for the org's data export files.
pub struct ExportClient {
    client: Client,
    base_url: String,
    session: SessionCredentials,
}

impl ExportClient {
    /// Create a client for the configured site using an established session.
    pub fn new(client: Client, config: &Config, session: SessionCredentials) -> Self {
        Self {
            client,
            base_url: config.site_base_url(),
            session,
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the export index: one relative download URL per line.
    pub async fn fetch_index(&self) -> Result<Vec<String>> {
        let url = self.url_for(EXPORT_INDEX_PATH);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.session.headers()?)
            .send()
            .await?;

        let response = check_auth(response).await?;
        let text = response.error_for_status()?.text().await?;
        tracing::debug!("Index response: {:?}", text);

        Ok(parse_index(&text))
    }

    /// Expected byte length of an export file, from a HEAD request.
    pub async fn probe_size(&self, path: &str) -> Result<u64> {
        let url = self.url_for(path);
        tracing::debug!("HEAD {}", url);

        let response = self
            .client
            .head(&url)
            .headers(self.session.headers()?)
            .send()
            .await?;

        let response = check_auth(response).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!(
                "Size probe failed: HTTP {}",
                status
            )));
        }

        content_length(response.headers()).ok_or_else(|| Error::MissingContentLength(url))
    }

    /// Start streaming an export file.
    pub async fn open_file(&self, path: &str) -> Result<Response> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.session.headers()?)
            .send()
            .await?;

        let response = check_auth(response).await?;
        Ok(response.error_for_status()?)
    }
}

/// Map 401/403 to a fatal authentication error; pass anything else through.
async fn check_auth(response: Response) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Auth error response: {}", body);
        return Err(Error::Authentication {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Read `Content-Length` straight from the headers.
///
/// `Response::content_length` reports the body size hint, which is zero for
/// HEAD responses, so it cannot be used for probing.
pub fn content_length(headers: &header::HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

/// Split an index body into entries.
///
/// Surrounding whitespace of the whole body is dropped; blank lines inside it
/// are kept as empty entries.
pub fn parse_index(body: &str) -> Vec<String> {
    body.trim().split('\n').map(str::to_string).collect()
}
