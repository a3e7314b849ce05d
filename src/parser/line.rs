//! Directive line classification
//!
//! Each trimmed, non-empty playlist line falls into one of four buckets:
//! `#EXTINF` metadata, an `#EXTGRP` group hint, a candidate stream URL, or
//! an ignorable line (comments, vendor directives, unsupported protocols).
//! Classification is the only place that inspects line syntax; the parser
//! state machine in the parent module only reacts to the produced variants.

use regex::Regex;
use std::collections::HashMap;

use crate::errors::{ParseError, ParseResult};

const HEADER_PREFIX: &str = "#EXTM3U";
const EXTINF_PREFIX: &str = "#EXTINF";
const EXTGRP_PREFIX: &str = "#EXTGRP";

/// Protocol prefixes a stream URL line must start with (case-insensitive).
const STREAM_PROTOCOLS: &[&str] = &["http://", "https://", "rtmp://", "rtsp://", "udp://"];

/// Structured classification of one playlist line.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveLine {
    /// `#EXTINF` metadata: resolved display name plus all `key="value"`
    /// attributes with lower-cased keys.
    ExtInf {
        name: String,
        attributes: HashMap<String, String>,
    },
    /// `#EXTGRP` fallback group title (may be empty when the directive
    /// carries no text after the colon).
    ExtGrp { group: String },
    /// A line whose lower-cased form starts with a recognized protocol.
    StreamUrl { url: String },
    /// Anything else: comments, vendor directives, unsupported protocols.
    Ignorable,
}

/// Returns true if `line` is an extended-M3U playlist header.
pub fn is_playlist_header(line: &str) -> bool {
    line.starts_with(HEADER_PREFIX)
}

/// Returns true if `line` looks like a stream URL the converter accepts.
pub fn is_stream_url(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    STREAM_PROTOCOLS
        .iter()
        .any(|protocol| lower.starts_with(protocol))
}

/// Classifier for playlist directive lines.
///
/// Holds the compiled patterns so one parse pass compiles them exactly once.
pub struct LineClassifier {
    extinf: Regex,
    attribute: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            // #EXTINF:<integer duration>[<attribute blob>],<title>
            extinf: Regex::new(r"^#EXTINF:(-?\d+)\s*([^,]*)\s*,(.*)$").unwrap(),
            attribute: Regex::new(r#"([\w-]+)="([^"]*)""#).unwrap(),
        }
    }

    /// Classify one trimmed, non-empty line.
    ///
    /// Only `#EXTINF` lines can fail: they must match the expected shape.
    /// Every other unrecognized line is deliberately inert so that vendor
    /// comments and unsupported protocols never abort a whole parse.
    pub fn classify(&self, line: &str) -> ParseResult<DirectiveLine> {
        if line.starts_with(EXTINF_PREFIX) {
            return self.classify_extinf(line);
        }
        if line.starts_with(EXTGRP_PREFIX) {
            return Ok(Self::classify_extgrp(line));
        }
        if line.starts_with('#') {
            return Ok(DirectiveLine::Ignorable);
        }
        if is_stream_url(line) {
            return Ok(DirectiveLine::StreamUrl {
                url: line.to_string(),
            });
        }
        Ok(DirectiveLine::Ignorable)
    }

    fn classify_extinf(&self, line: &str) -> ParseResult<DirectiveLine> {
        let captures = self
            .extinf
            .captures(line)
            .ok_or_else(|| ParseError::malformed_directive(line))?;

        let attributes = self.parse_attributes(&captures[2]);

        // tvg-name wins over the free-text title when present and non-empty
        let name = attributes
            .get("tvg-name")
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| captures[3].trim().to_string());

        Ok(DirectiveLine::ExtInf { name, attributes })
    }

    fn classify_extgrp(line: &str) -> DirectiveLine {
        let group = line
            .split_once(':')
            .map(|(_, rest)| rest.trim())
            .unwrap_or("")
            .to_string();
        DirectiveLine::ExtGrp { group }
    }

    /// Scan an attribute blob for `key="value"` pairs.
    ///
    /// Keys are case-folded to lower case; later duplicates overwrite
    /// earlier ones; fragments that do not match the pattern are skipped,
    /// which is the leniency real-world playlists require.
    fn parse_attributes(&self, blob: &str) -> HashMap<String, String> {
        let mut attributes = HashMap::new();
        for captures in self.attribute.captures_iter(blob) {
            attributes.insert(captures[1].to_lowercase(), captures[2].to_string());
        }
        attributes
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_detection() {
        assert!(is_playlist_header("#EXTM3U"));
        assert!(is_playlist_header("#EXTM3U url-tvg=\"http://x/epg.xml\""));
        assert!(!is_playlist_header("#EXTINF:-1,Channel"));
    }

    #[test]
    fn test_stream_url_protocols_are_case_insensitive() {
        assert!(is_stream_url("http://stream.example/live"));
        assert!(is_stream_url("HTTPS://stream.example/live"));
        assert!(is_stream_url("RtMp://stream.example/live"));
        assert!(is_stream_url("rtsp://stream.example/live"));
        assert!(is_stream_url("udp://239.0.0.1:1234"));
        assert!(!is_stream_url("ftp://stream.example/live"));
        assert!(!is_stream_url("stream.example/live"));
    }

    #[test]
    fn test_classify_extinf_with_attributes() {
        let classifier = LineClassifier::new();
        let line = "#EXTINF:-1 tvg-name=\"News 24\" tvg-logo=\"http://x/logo.png\" group-title=\"News\",News 24 HD";
        match classifier.classify(line).unwrap() {
            DirectiveLine::ExtInf { name, attributes } => {
                assert_eq!(name, "News 24");
                assert_eq!(attributes["tvg-logo"], "http://x/logo.png");
                assert_eq!(attributes["group-title"], "News");
            }
            other => panic!("expected ExtInf, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_extinf_title_fallback() {
        let classifier = LineClassifier::new();
        match classifier.classify("#EXTINF:-1,  Plain Title  ").unwrap() {
            DirectiveLine::ExtInf { name, attributes } => {
                assert_eq!(name, "Plain Title");
                assert!(attributes.is_empty());
            }
            other => panic!("expected ExtInf, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_extinf_empty_tvg_name_falls_back_to_title() {
        let classifier = LineClassifier::new();
        match classifier
            .classify("#EXTINF:-1 tvg-name=\"\",Fallback")
            .unwrap()
        {
            DirectiveLine::ExtInf { name, .. } => assert_eq!(name, "Fallback"),
            other => panic!("expected ExtInf, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_extinf_rejects_bad_duration() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("#EXTINF:notanumber ,Title");
        assert!(matches!(
            result,
            Err(ParseError::MalformedDirective { .. })
        ));
    }

    #[test]
    fn test_classify_extinf_rejects_missing_comma() {
        let classifier = LineClassifier::new();
        let result = classifier.classify("#EXTINF:-1 tvg-name=\"News\"");
        assert!(matches!(
            result,
            Err(ParseError::MalformedDirective { .. })
        ));
    }

    #[test]
    fn test_attribute_keys_are_lowercased_and_last_duplicate_wins() {
        let classifier = LineClassifier::new();
        let blob = "TVG-Name=\"First\" tvg-name=\"Second\" Group-Title=\"Movies\"";
        let attributes = classifier.parse_attributes(blob);
        assert_eq!(attributes["tvg-name"], "Second");
        assert_eq!(attributes["group-title"], "Movies");
    }

    #[test]
    fn test_malformed_attribute_fragments_are_skipped() {
        let classifier = LineClassifier::new();
        let attributes = classifier.parse_attributes("tvg-id=unquoted tvg-logo=\"http://x/l.png\"");
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes["tvg-logo"], "http://x/l.png");
    }

    #[test]
    fn test_classify_extgrp() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("#EXTGRP: Sports ").unwrap(),
            DirectiveLine::ExtGrp {
                group: "Sports".to_string()
            }
        );
        // no colon means no group text
        assert_eq!(
            classifier.classify("#EXTGRP").unwrap(),
            DirectiveLine::ExtGrp {
                group: String::new()
            }
        );
    }

    #[test]
    fn test_comments_and_unsupported_protocols_are_ignorable() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("#EXTVLCOPT:http-referrer=x").unwrap(),
            DirectiveLine::Ignorable
        );
        assert_eq!(
            classifier.classify("ftp://stream.example/live").unwrap(),
            DirectiveLine::Ignorable
        );
        assert_eq!(
            classifier.classify("just some text").unwrap(),
            DirectiveLine::Ignorable
        );
    }
}
