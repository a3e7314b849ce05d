use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::FetchConfig;
use crate::errors::{SourceError, SourceResult};

/// Retrieves raw playlist text from a source identifier.
pub struct PlaylistFetcher {
    client: Client,
}

impl PlaylistFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Resolve `source` and return the playlist text.
    ///
    /// Recognized source forms:
    /// - `http://` / `https://` URLs, fetched over HTTP
    /// - `file://` URLs, read from the local filesystem
    /// - anything that does not parse as a URL, treated as a bare path
    pub async fn fetch(&self, source: &str) -> SourceResult<String> {
        match Url::parse(source) {
            Ok(parsed) => match parsed.scheme() {
                "http" | "https" => self.fetch_http(source).await,
                "file" => {
                    let path = parsed
                        .to_file_path()
                        .unwrap_or_else(|_| PathBuf::from(parsed.path()));
                    self.read_file(&path).await
                }
                scheme => Err(SourceError::unsupported_scheme(source, scheme)),
            },
            Err(_) => self.read_file(Path::new(source)).await,
        }
    }

    async fn fetch_http(&self, url: &str) -> SourceResult<String> {
        info!("Fetching playlist from {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|cause| SourceError::fetch_failed(url, cause))?;

        // text() honors the charset from the Content-Type header and
        // replaces undecodable bytes instead of failing
        let body = response
            .text()
            .await
            .map_err(|cause| SourceError::fetch_failed(url, cause))?;

        debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }

    async fn read_file(&self, path: &Path) -> SourceResult<String> {
        info!("Reading playlist from {}", path.display());

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|cause| SourceError::read_failed(path.display().to_string(), cause))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
