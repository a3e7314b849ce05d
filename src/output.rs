//! JSON output writing
//!
//! The channel list serializes to a pretty-printed JSON array. Destination
//! is either a file path (overwritten) or standard output, which gets a
//! trailing newline so the payload plays well in a shell pipeline.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::{OutputError, OutputResult};
use crate::models::Channel;

pub fn write_channels(channels: &[Channel], destination: Option<&Path>) -> OutputResult<()> {
    let payload = serde_json::to_string_pretty(channels)?;

    match destination {
        Some(path) => {
            std::fs::write(path, &payload).map_err(|cause| OutputError::Write {
                path: path.display().to_string(),
                source: cause,
            })?;
            info!("Wrote {} channels to {}", channels.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(payload.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }

    Ok(())
}
