//! M3U "Plus" playlist parsing
//!
//! The parser walks the trimmed, non-empty lines of a playlist document and
//! folds them through a single pending-channel slot: `#EXTINF` fills the
//! slot, `#EXTGRP` enriches it, and a stream-URL line completes it into a
//! [`Channel`]. Metadata and its URL are adjacent and 1:1 in the M3U
//! convention, so one slot is all the state the format needs.
//!
//! Strictness is reserved for the two signals of a truly unusable source: a
//! missing or garbled `#EXTM3U` header and a document that yields no
//! channels at all. Everything else (stray lines, orphan URLs, a pending
//! channel preempted by a fresh `#EXTINF`) is tolerated silently, because
//! real-world playlist producers interleave vendor directives and drop
//! metadata in ways that do not make the remaining channels any less usable.

pub mod line;

use std::collections::HashMap;
use tracing::{debug, warn};

pub use line::{is_playlist_header, is_stream_url, DirectiveLine, LineClassifier};

use crate::errors::{ParseError, ParseResult};
use crate::models::Channel;

/// In-flight channel metadata awaiting its stream URL.
///
/// A fresh `#EXTINF` replaces the whole slot; emission clears it. The
/// attribute map is `Option` so that a lone `#EXTGRP` can seed attributes
/// without pretending a name was seen.
#[derive(Debug, Default)]
struct PendingChannel {
    name: Option<String>,
    attributes: Option<HashMap<String, String>>,
}

impl PendingChannel {
    /// Take the pending metadata if it is complete enough to emit a channel:
    /// a non-empty name and an attribute map (possibly empty) must both be
    /// present. Incomplete state is left in place untouched.
    fn finish(&mut self) -> Option<(String, HashMap<String, String>)> {
        match (self.name.as_deref(), self.attributes.as_ref()) {
            (Some(name), Some(_)) if !name.is_empty() => {
                Some((self.name.take()?, self.attributes.take()?))
            }
            _ => None,
        }
    }
}

/// Parse a complete playlist document into channel records.
///
/// The input may use any line-ending convention; lines are trimmed and blank
/// lines dropped before classification. The first content line must be an
/// `#EXTM3U` header and the document must produce at least one channel.
pub fn parse_playlist(raw: &str) -> ParseResult<Vec<Channel>> {
    let mut lines = raw.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = lines.next().ok_or(ParseError::MissingHeader)?;
    if !is_playlist_header(header) {
        return Err(ParseError::invalid_header(header));
    }

    let classifier = LineClassifier::new();
    let mut channels = Vec::new();
    let mut pending = PendingChannel::default();

    for current in lines {
        match classifier.classify(current)? {
            DirectiveLine::ExtInf { name, attributes } => {
                // Wholesale replacement: an unfinished pending channel is
                // dropped without error, last #EXTINF wins.
                pending = PendingChannel {
                    name: Some(name),
                    attributes: Some(attributes),
                };
            }
            DirectiveLine::ExtGrp { group } => {
                pending
                    .attributes
                    .get_or_insert_with(HashMap::new)
                    .entry("group-title".to_string())
                    .or_insert(group);
            }
            DirectiveLine::StreamUrl { url } => match pending.finish() {
                Some((name, attributes)) => {
                    channels.push(build_channel(name, url, attributes));
                }
                None => {
                    warn!("Ignoring stream URL without preceding #EXTINF metadata: {url}");
                }
            },
            DirectiveLine::Ignorable => {}
        }
    }

    if channels.is_empty() {
        return Err(ParseError::EmptyResult);
    }

    debug!("Parsed {} channels from playlist", channels.len());
    Ok(channels)
}

fn build_channel(name: String, url: String, attributes: HashMap<String, String>) -> Channel {
    let group = non_empty_attribute(&attributes, "group-title");
    let logo = non_empty_attribute(&attributes, "tvg-logo");

    Channel {
        name: name.trim().to_string(),
        url: url.trim().to_string(),
        group,
        logo,
        raw_attributes: if attributes.is_empty() {
            None
        } else {
            Some(attributes)
        },
    }
}

fn non_empty_attribute(attributes: &HashMap<String, String>, key: &str) -> Option<String> {
    attributes
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
