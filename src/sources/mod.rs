//! Playlist source retrieval
//!
//! Resolving a source identifier to raw playlist text is the converter's
//! only I/O boundary. HTTP(S) URLs are downloaded with a timeout-bounded
//! client sending an identifying User-Agent; `file://` URLs and bare
//! filesystem paths are read directly with permissive decoding. Any other
//! scheme is rejected up front.

pub mod fetch;

pub use fetch::PlaylistFetcher;
