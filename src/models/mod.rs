use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single channel entry produced by the playlist parser.
///
/// Channels are write-once: the parser materializes one only after it has
/// seen both `#EXTINF` metadata and the stream URL that closes it, and never
/// mutates it afterwards.
///
/// The JSON surface is exactly `name` and `url`, plus `group` and `logo`
/// when they carry a non-empty value. `raw_attributes` keeps every
/// lower-cased `key="value"` pair from the `#EXTINF` line for downstream
/// consumers of the library, but is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip)]
    pub raw_attributes: Option<HashMap<String, String>>,
}
