pub mod config;
pub mod errors;
pub mod models;
pub mod output;
pub mod parser;
pub mod sources;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Channel;
use crate::sources::PlaylistFetcher;

/// Fetch a playlist from `source` and parse it into channel records.
///
/// This is the one-shot conversion entry point used by the CLI: it resolves
/// the source (HTTP(S) URL, `file://` URL, or filesystem path), retrieves the
/// raw playlist text, and runs the parser over it. Serializing the returned
/// channels is left to the caller.
pub async fn convert(source: &str, config: &Config) -> AppResult<Vec<Channel>> {
    let fetcher = PlaylistFetcher::new(&config.fetch);
    let raw = fetcher.fetch(source).await?;
    let channels = parser::parse_playlist(&raw)?;
    Ok(channels)
}
