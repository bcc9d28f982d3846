//! Deserialization error type for typed responses.
//!
//! A [`DeserializationError`] is raised when a 2xx body cannot be mapped
//! onto the requested type. It is never retried: the same body would fail
//! again.
//!
//! # Example
//!
//! ```rust
//! use riot_api::rest::{deserialize_full, DeserializationError};
//!
//! let result: Result<Vec<i64>, DeserializationError> = deserialize_full("{\"not\": \"a list\"}");
//! let error = result.unwrap_err();
//! assert!(error.type_name.contains("Vec"));
//! ```

use thiserror::Error;

/// Error returned when a response body does not match the requested type.
#[derive(Debug, Error)]
#[error("Failed to deserialize response into {type_name}: {source}")]
pub struct DeserializationError {
    /// Name of the requested type.
    pub type_name: &'static str,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

impl DeserializationError {
    /// Creates an error for the target type `T`.
    #[must_use]
    pub fn new<T>(source: serde_json::Error) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_target_type() {
        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let error = DeserializationError::new::<u8>(source);

        assert_eq!(error.type_name, "u8");
        assert!(error.to_string().starts_with("Failed to deserialize response into u8"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
