//! Error types for data validation in skycast-types.

use thiserror::Error;

/// Errors that can occur when constructing weather data from raw provider
/// values.
///
/// This error type is provider-agnostic and does not include HTTP or
/// decoding errors (those belong in skycast-core).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A Unix timestamp outside the representable date range.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// A field value outside its documented range.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Result type alias using skycast-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
