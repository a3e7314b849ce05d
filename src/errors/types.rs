//! Error type definitions for the playlist converter
//!
//! This module defines all error types used throughout the application,
//! providing a hierarchical error system that makes debugging and error
//! handling more straightforward.

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur during a
/// conversion. It uses `thiserror` to provide automatic error trait
/// implementations and proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Playlist retrieval errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Playlist parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Channel list serialization and writing errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Playlist retrieval specific errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// Source identifier uses a scheme other than http(s), file, or a bare path
    #[error("Unsupported URL scheme '{scheme}' in source '{url}'")]
    UnsupportedScheme { url: String, scheme: String },

    /// HTTP download failed (connection, timeout, or non-success status)
    #[error("Failed to fetch playlist from '{url}': {source}")]
    FetchFailed { url: String, source: reqwest::Error },

    /// Filesystem read failed
    #[error("Failed to read playlist file '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
}

/// Playlist parsing specific errors
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    /// Input is empty or blank after trimming
    #[error("Playlist is empty")]
    MissingHeader,

    /// First content line is not an #EXTM3U header
    #[error("Playlist does not start with #EXTM3U, found: '{line}'")]
    InvalidHeader { line: String },

    /// An #EXTINF line does not match the expected shape
    #[error("Malformed #EXTINF directive: '{line}'")]
    MalformedDirective { line: String },

    /// Parsing finished without emitting a single channel
    #[error("No channels found in playlist")]
    EmptyResult,
}

/// Output writing specific errors
#[derive(Error, Debug)]
pub enum OutputError {
    /// Channel list could not be serialized to JSON
    #[error("Failed to serialize channels: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Destination file could not be written
    #[error("Failed to write output to '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// Standard output stream write failed
    #[error("Failed to write output: {0}")]
    Stdout(#[from] std::io::Error),
}

impl SourceError {
    /// Create an unsupported scheme error
    pub fn unsupported_scheme<U: Into<String>, S: Into<String>>(url: U, scheme: S) -> Self {
        Self::UnsupportedScheme {
            url: url.into(),
            scheme: scheme.into(),
        }
    }

    /// Create a fetch failed error wrapping the HTTP cause
    pub fn fetch_failed<U: Into<String>>(url: U, source: reqwest::Error) -> Self {
        Self::FetchFailed {
            url: url.into(),
            source,
        }
    }

    /// Create a read failed error wrapping the I/O cause
    pub fn read_failed<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }
}

impl ParseError {
    /// Create an invalid header error for the offending line
    pub fn invalid_header<L: Into<String>>(line: L) -> Self {
        Self::InvalidHeader { line: line.into() }
    }

    /// Create a malformed directive error for the offending line
    pub fn malformed_directive<L: Into<String>>(line: L) -> Self {
        Self::MalformedDirective { line: line.into() }
    }
}
