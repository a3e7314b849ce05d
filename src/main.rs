use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m3u_json::{config::Config, output};

#[derive(Parser)]
#[command(name = "m3u-json")]
#[command(version = "0.1.0")]
#[command(about = "Convert M3U/M3U8 playlists into a normalized JSON channel list")]
#[command(long_about = None)]
struct Cli {
    /// Playlist source: http(s) URL, file:// URL, or filesystem path
    source: String,

    /// Output file path; prints to stdout when omitted
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds (overrides config file)
    #[arg(short, long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level; logs go to stderr so the
    // JSON payload on stdout stays clean
    let log_filter = format!("m3u_json={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load(&cli.config)?;

    // Override config with CLI arguments
    if let Some(timeout) = cli.timeout {
        config.fetch.timeout_seconds = timeout;
    }

    let channels = m3u_json::convert(&cli.source, &config).await?;
    info!("Converted {} channels from {}", channels.len(), cli.source);

    output::write_channels(&channels, cli.output.as_deref())?;

    Ok(())
}
