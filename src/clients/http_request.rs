//! HTTP request types for the Riot API SDK.
//!
//! This module provides the [`HttpRequest`] descriptor and its builder.
//! A request is validated once when built and is never mutated afterwards;
//! every retry re-sends the same URL, query and body.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Riot API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// An HTTP request to be sent to the Riot API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use riot_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://na1.api.riotgames.com/lol/platform/v3/champions",
/// )
/// .query_param("freeToPlay", "true")
/// .build()
/// .unwrap();
///
/// let post_request = HttpRequest::builder(
///     HttpMethod::Post,
///     "https://global.api.riotgames.com/lol/tournament/v3/tournaments",
/// )
/// .body(json!({"name": "Cup", "providerId": 1}))
/// .build()
/// .unwrap();
/// # let _ = (get_request, post_request);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, without query string.
    pub url: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters in order; a key may repeat.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Name of the endpoint, used to track per-method rate limits.
    pub rate_limit_key: Option<String>,
    /// Overrides the configured number of retries.
    pub max_retries: Option<u32>,
    /// Overrides the configured per-attempt timeout.
    pub timeout: Option<Duration>,
    /// Cancels the request at whichever wait is active.
    pub cancellation: CancellationToken,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `url` is empty
    /// - `http_method` is `Get` but a `body` is set
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.url.trim().is_empty() {
            return Err(InvalidHttpRequestError::EmptyUrl);
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            });
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the URL with the query string appended, as it goes on the wire.
    #[must_use]
    pub fn full_url(&self) -> String {
        crate::rest::query::build_url(&self.url, &self.query)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
    extra_headers: Option<HashMap<String, String>>,
    rate_limit_key: Option<String>,
    max_retries: Option<u32>,
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            query: Vec::new(),
            extra_headers: None,
            rate_limit_key: None,
            max_retries: None,
            timeout: None,
            cancellation: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Names the endpoint for per-method rate limiting.
    #[must_use]
    pub fn rate_limit_key(mut self, key: impl Into<String>) -> Self {
        self.rate_limit_key = Some(key.into());
        self
    }

    /// Overrides the configured number of retries for this request.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Overrides the configured per-attempt timeout for this request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            rate_limit_key: self.rate_limit_key,
            max_retries: self.max_retries,
            timeout: self.timeout,
            cancellation: self.cancellation.unwrap_or_default(),
        };
        request.verify()?;
        Ok(request)
    }
}
