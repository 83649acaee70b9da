//! Error types for the conversion pipeline.

use thiserror::Error;

/// Errors that can occur before a conversion starts.
///
/// The conversion itself is total: unrecognized or empty input degrades to
/// fewer blocks plus diagnostics, never to an error. Only reading the input
/// string into an element tree can fail.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The input could not be parsed into an element tree.
    #[error("HTML parsing error: {0}")]
    ParseError(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConversionError>;
