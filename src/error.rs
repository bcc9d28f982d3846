//! Error types for the Riot API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A configuration error is always raised before any
//! network call is attempted, so it never consumes rate-limit budget.
//!
//! # Example
//!
//! ```rust
//! use riot_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration or request preparation.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Riot API key.")]
    EmptyApiKey,

    /// The platform identifier is not one of the known game server shards.
    #[error("Platform ID '{platform}' is not supported.")]
    UnsupportedPlatform {
        /// The platform identifier that was provided.
        platform: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://localhost:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A request parameter or parameter combination is invalid.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The error reported by the HTTP stack.
        reason: String,
    },
}
