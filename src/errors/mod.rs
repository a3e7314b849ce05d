//! Centralized error handling for the playlist converter
//!
//! Every failure is terminal for a single conversion: no partial or degraded
//! channel list is ever returned. The enums below separate the three layers
//! that can fail independently:
//!
//! - **Source errors**: resolving and retrieving the playlist bytes
//! - **Parse errors**: document-level and directive-level playlist problems
//! - **Output errors**: serializing the channel list and writing it out

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Parse Results
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Output Results
pub type OutputResult<T> = Result<T, OutputError>;
