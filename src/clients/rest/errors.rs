//! Endpoint-facing error type for the Riot API SDK.
//!
//! Every typed call on [`RiotClient`](crate::clients::RiotClient) returns
//! [`ApiError`], which wraps the error of whichever layer failed:
//!
//! - [`ApiError::Config`]: A parameter was rejected before any request was sent
//! - [`ApiError::Http`]: The request failed (permanent status, retries exhausted, cancelled)
//! - [`ApiError::Deserialize`]: A 2xx body did not match the requested type
//!
//! # Example
//!
//! ```rust,ignore
//! use riot_api::ApiError;
//!
//! match client.get_match(12345, RequestOptions::default()).await {
//!     Ok(game) => println!("Duration: {}", game.game_duration),
//!     Err(e) if e.is_not_found() => println!("No such match"),
//!     Err(ApiError::Http(e)) if e.is_cancelled() => println!("Cancelled"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use crate::rest::DeserializationError;
use thiserror::Error;

/// Error type for typed API calls.
///
/// # Example
///
/// ```rust
/// use riot_api::{ApiError, ConfigError};
///
/// let error: ApiError = ConfigError::UnsupportedPlatform { platform: "XX1".to_string() }.into();
/// assert_eq!(error.to_string(), "Platform ID 'XX1' is not supported.");
/// assert_eq!(error.status(), None);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// A configuration or parameter error, raised before any request.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body did not match the requested type.
    #[error(transparent)]
    Deserialize(#[from] DeserializationError),
}

impl ApiError {
    /// Returns the HTTP status code of the failure, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Config(_) | Self::Deserialize(_) => None,
        }
    }

    /// Returns `true` for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_not_found())
    }

    /// Returns `true` if the caller cancelled the request.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Http(HttpError::Cancelled))
    }

    /// Returns `true` if transient failures exhausted the retry budget.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Http(HttpError::MaxRetries(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, MaxHttpRetriesExceededError, TransientError};

    #[test]
    fn test_http_errors_pass_through_transparently() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "Data not found".to_string(),
            body: String::new(),
        });
        let error: ApiError = http_error.into();

        assert_eq!(
            error.to_string(),
            "Request failed with status 404: Data not found"
        );
        assert!(error.is_not_found());
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_classification_helpers() {
        let error: ApiError = HttpError::Cancelled.into();
        assert!(error.is_cancelled());
        assert!(!error.is_transient());

        let error: ApiError = HttpError::MaxRetries(MaxHttpRetriesExceededError {
            attempts: 4,
            last: TransientError::Server {
                code: 503,
                message: String::new(),
            },
        })
        .into();
        assert!(error.is_transient());
        assert!(!error.is_not_found());
        assert_eq!(error.status(), Some(503));
    }

    #[test]
    fn test_config_error_conversion() {
        let error: ApiError = ConfigError::EmptyApiKey.into();
        assert!(matches!(error, ApiError::Config(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_deserialize_error_conversion() {
        let source = serde_json::from_str::<i64>("{}").unwrap_err();
        let error: ApiError = DeserializationError::new::<i64>(source).into();
        assert!(matches!(error, ApiError::Deserialize(_)));
        assert!(error.to_string().contains("i64"));
    }
}
