//! Riot API client implementation.
//!
//! This module provides the [`RiotClient`] type, the facade every endpoint
//! method goes through. It resolves the platform and endpoint into a
//! validated [`HttpRequest`], sends it through the shared executor, and
//! deserializes the body into the requested type.

use std::fmt::Display;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::clients::rate_limiter::RateLimitSnapshot;
use crate::clients::rest::ApiError;
use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse, InvalidHttpRequestError};
use crate::config::{PlatformId, RiotConfig};
use crate::rest::{deserialize, deserialize_full, Endpoint, FieldSelection, SelectableFields};

/// Per-call options.
///
/// Every field is optional; unset fields fall back to the client
/// configuration.
///
/// # Example
///
/// ```rust
/// use riot_api::{PlatformId, RequestOptions};
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let options = RequestOptions::new()
///     .platform(PlatformId::Kr)
///     .cancellation(token.child_token());
///
/// assert_eq!(options.platform, Some(PlatformId::Kr));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Platform to send the call to.
    pub platform: Option<PlatformId>,
    /// Token cancelling the call at whichever wait is active.
    pub cancellation: Option<CancellationToken>,
    /// Overrides the configured number of retries.
    pub max_retries: Option<u32>,
    /// Overrides the configured per-attempt timeout.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates options that defer to the client configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends the call to `platform`.
    #[must_use]
    pub const fn platform(mut self, platform: PlatformId) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Overrides the number of retries.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Overrides the per-attempt timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client for the League of Legends API.
///
/// Owns the configuration and one [`HttpClient`], whose rate limiter is
/// shared by every call made through this instance. Separate instances never
/// share state, so one process can hold clients for several API keys.
///
/// # Thread Safety
///
/// `RiotClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use riot_api::{ApiKey, PlatformId, RequestOptions, RiotClient, RiotConfig};
///
/// let config = RiotConfig::builder()
///     .api_key(ApiKey::new("RGAPI-0000")?)
///     .platform(PlatformId::Euw1)
///     .build()?;
/// let client = RiotClient::new(config)?;
///
/// let rotation = client.get_champions(true, RequestOptions::new()).await?;
/// for champion in &rotation.champions {
///     println!("Free this week: {}", champion.id);
/// }
/// ```
#[derive(Debug)]
pub struct RiotClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The client configuration.
    config: RiotConfig,
}

// Verify RiotClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RiotClient>();
};

impl RiotClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`](crate::ConfigError::HttpClient) if
    /// the HTTP stack cannot be initialized.
    pub fn new(config: RiotConfig) -> Result<Self, ApiError> {
        let http_client = HttpClient::new(&config)?;
        tracing::debug!(platform = %config.platform(), "Created Riot API client");

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &RiotConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the current rate-limit state of a platform's host.
    #[must_use]
    pub fn rate_limits(&self, platform: PlatformId) -> RateLimitSnapshot {
        self.http_client.rate_limiter().snapshot(platform.host())
    }

    /// Returns the platform a call goes to.
    #[must_use]
    pub fn platform(&self, options: &RequestOptions) -> PlatformId {
        options.platform.unwrap_or_else(|| self.config.platform())
    }

    /// Builds the request for an endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if `path` does not match the endpoint's
    /// parameters, or [`ApiError::Http`] if the request fails validation.
    pub fn build_request<V: Display>(
        &self,
        endpoint: &Endpoint,
        path: &[V],
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
        options: &RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let url = endpoint.url(
            self.platform(options),
            self.config.use_tournament_stub(),
            path,
        )?;

        let mut builder = HttpRequest::builder(endpoint.http_method, url)
            .query(query)
            .rate_limit_key(endpoint.name);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(token) = &options.cancellation {
            builder = builder.cancellation(token.clone());
        }
        if let Some(max_retries) = options.max_retries {
            builder = builder.max_retries(max_retries);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().map_err(|e| ApiError::Http(e.into()))
    }

    /// Sends an endpoint call and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn send<V: Display>(
        &self,
        endpoint: &Endpoint,
        path: &[V],
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
        options: &RequestOptions,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(endpoint, path, query, body, options)?;
        Ok(self.http_client.request(&request).await?)
    }

    /// Sends an endpoint call and deserializes the body into `T`.
    ///
    /// A 2xx response with an empty body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body does not
    /// match `T`.
    pub async fn execute<T, V>(
        &self,
        endpoint: &Endpoint,
        path: &[V],
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
        options: &RequestOptions,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
        V: Display,
    {
        let response = self.send(endpoint, path, query, body, options).await?;
        Ok(deserialize_full(&response.body)?)
    }

    /// Like [`RiotClient::execute`], leaving unselected fields at their zero
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body does not
    /// match `T`.
    pub async fn execute_selected<T, V>(
        &self,
        endpoint: &Endpoint,
        path: &[V],
        query: Vec<(String, String)>,
        selection: &FieldSelection,
        options: &RequestOptions,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default + SelectableFields,
        V: Display,
    {
        let response = self.send(endpoint, path, query, None, options).await?;
        Ok(deserialize(&response.body, selection)?)
    }

    /// Sends a call without a body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body does not
    /// match `T`.
    pub async fn get<T, V>(
        &self,
        endpoint: &Endpoint,
        path: &[V],
        query: Vec<(String, String)>,
        options: &RequestOptions,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
        V: Display,
    {
        self.execute(endpoint, path, query, None, options).await
    }

    /// Sends a call with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `body` cannot be serialized, the request
    /// fails, or the response does not match `T`.
    pub async fn post<T, B, V>(
        &self,
        endpoint: &Endpoint,
        path: &[V],
        query: Vec<(String, String)>,
        body: &B,
        options: &RequestOptions,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
        V: Display,
    {
        let body = Self::to_body(body)?;
        self.execute(endpoint, path, query, Some(body), options).await
    }

    /// Sends a call with a JSON body, for updates.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `body` cannot be serialized, the request
    /// fails, or the response does not match `T`.
    pub async fn put<T, B, V>(
        &self,
        endpoint: &Endpoint,
        path: &[V],
        body: &B,
        options: &RequestOptions,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
        V: Display,
    {
        let body = Self::to_body(body)?;
        self.execute(endpoint, path, Vec::new(), Some(body), options)
            .await
    }

    fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(|e| {
            ApiError::Http(HttpError::InvalidRequest(InvalidHttpRequestError::Body(
                e.to_string(),
            )))
        })
    }
}
