//! Error types for skycast-core.
//!
//! The taxonomy matches how failures are surfaced to the user:
//!
//! | Error | Surfaced as |
//! |-------|-------------|
//! | [`Error::Provider`] | the provider's own message text |
//! | [`Error::Transport`] | a generic message; the cause is logged |
//! | [`Error::Decode`] | a generic message; the cause is logged |
//! | [`Error::InvalidData`] | a generic message; the cause is logged |
//!
//! Empty-city validation happens upstream of the client and never reaches
//! this type, and an empty aggregation result is a valid outcome rather than
//! an error.

use thiserror::Error;

/// Errors that can occur when fetching weather data.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Both requests completed but the provider reported a failure status.
    ///
    /// The message is the provider's own text and is safe to render as-is.
    #[error("{message}")]
    Provider {
        /// Provider-supplied failure message.
        message: String,
    },

    /// Network-level failure: connect, DNS resolution, or body read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body did not match the provider schema.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A decoded value failed domain validation.
    #[error("Invalid provider data: {0}")]
    InvalidData(#[from] skycast_types::ParseError),
}

impl Error {
    /// Create a provider error from the provider's message text.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Whether this failure carries a provider message suitable for direct
    /// display. Everything else is rendered generically and logged.
    #[must_use]
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }
}

/// Result type alias using skycast-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_displays_message_verbatim() {
        let err = Error::provider("city not found");
        assert_eq!(err.to_string(), "city not found");
        assert!(err.is_provider());
    }

    #[test]
    fn test_decode_error_is_not_provider() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(!err.is_provider());
        assert!(err.to_string().starts_with("Malformed response"));
    }

    #[test]
    fn test_invalid_data_conversion() {
        let parse_err = skycast_types::ParseError::InvalidTimestamp(i64::MAX);
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(!err.is_provider());
    }
}
