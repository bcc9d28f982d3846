//! HTTP-specific error types for the Riot API SDK.
//!
//! This module contains error types for HTTP operations, including permanent
//! response errors, retry exhaustion, cancellation and request validation.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: A permanent failure (4xx other than 429); never retried
//! - [`MaxHttpRetriesExceededError`]: Transient failures persisted past the retry budget
//! - [`TransientError`]: The kind of transient failure seen on an attempt
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use riot_api::clients::HttpError;
//!
//! match client.request(&request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) if e.code == 404 => println!("Not found"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("Gave up after {} attempts", e.attempts),
//!     Err(HttpError::Cancelled) => println!("Cancelled"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned when a request receives a permanent (non-retryable) response.
///
/// The message is taken from the `status.message` field of the Riot error
/// body when present, otherwise from the status line.
///
/// # Example
///
/// ```rust
/// use riot_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Data not found".to_string(),
///     body: String::new(),
/// };
///
/// assert_eq!(error.to_string(), "Request failed with status 404: Data not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human readable error message.
    pub message: String,
    /// The raw error body.
    pub body: String,
}

/// The kind of failure an attempt ended with when that failure is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransientError {
    /// The attempt did not complete within the per-attempt timeout.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// The server answered 429.
    #[error("Rate limit exceeded ({limit_type}): {message}")]
    RateLimited {
        /// Value of the `X-Rate-Limit-Type` header, or `unknown`.
        limit_type: String,
        /// Error message from the response.
        message: String,
        /// Value of the `Retry-After` header, if present.
        retry_after: Option<Duration>,
    },

    /// The server answered with a 5xx status.
    #[error("Server error {code}: {message}")]
    Server {
        /// The HTTP status code.
        code: u16,
        /// Error message from the response.
        message: String,
    },

    /// The connection failed (reset, refused, DNS, TLS or body read).
    #[error("Network error: {0}")]
    Network(String),
}

impl TransientError {
    /// Returns the HTTP status code, if the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::Server { code, .. } => Some(*code),
            Self::Timeout { .. } | Self::Network(_) => None,
        }
    }
}

/// Error returned when transient failures persist past the retry budget.
///
/// # Example
///
/// ```rust
/// use riot_api::clients::{MaxHttpRetriesExceededError, TransientError};
///
/// let error = MaxHttpRetriesExceededError {
///     attempts: 4,
///     last: TransientError::Server { code: 503, message: "Service Unavailable".to_string() },
/// };
///
/// assert!(error.to_string().contains("4 attempt(s)"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed after {attempts} attempt(s). Last failure: {last}")]
pub struct MaxHttpRetriesExceededError {
    /// Number of attempts made.
    pub attempts: u32,
    /// The failure seen on the last attempt.
    pub last: TransientError,
}

/// Error returned when an HTTP request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request URL is empty.
    #[error("Cannot send a request without a URL.")]
    EmptyUrl,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that forbids a body.
        method: String,
    },

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Body(String),
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A permanent HTTP response error (4xx other than 429).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Transient failures exhausted the retry budget.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// The caller cancelled the request.
    #[error("Request was cancelled")]
    Cancelled,

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns the HTTP status code of the failure, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => e.last.status(),
            Self::Cancelled | Self::InvalidRequest(_) => None,
        }
    }

    /// Returns `true` for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Response(e) if e.code == 404)
    }

    /// Returns `true` if the failure was transient (retries were exhausted or disabled).
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::MaxRetries(_))
    }

    /// Returns `true` if the last attempt timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::MaxRetries(MaxHttpRetriesExceededError {
                last: TransientError::Timeout { .. },
                ..
            })
        )
    }

    /// Returns `true` if the caller cancelled the request.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
