//! HTTP client for Riot API communication.
//!
//! This module provides the [`HttpClient`] type, the request executor shared
//! by every endpoint. It applies client-side rate limiting, per-attempt
//! timeouts, retries with exponential backoff, and cancellation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::clients::errors::{
    HttpError, HttpResponseError, MaxHttpRetriesExceededError, TransientError,
};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::rate_limiter::RateLimiter;
use crate::config::{HostUrl, RetryPolicy, RiotConfig};
use crate::error::ConfigError;
use crate::rest::query::build_url;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Riot-Token";

/// HTTP client for making requests to the Riot API.
///
/// The client handles:
/// - Default headers including User-Agent and the `X-Riot-Token` API key
/// - Client-side rate limiting shared by every request it sends
/// - Automatic retries for timeouts, 429, 5xx and connection failures
/// - Cancellation at whichever wait is active
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use riot_api::{ApiKey, RiotConfig};
/// use riot_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = RiotConfig::builder()
///     .api_key(ApiKey::new("RGAPI-0000")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://na1.api.riotgames.com/lol/platform/v3/champions",
/// )
/// .build()?;
///
/// let response = client.request(&request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Replaces scheme and host of every request URL when set.
    api_host: Option<HostUrl>,
    /// Default per-attempt timeout.
    timeout: Duration,
    /// Retry settings.
    retry_policy: RetryPolicy,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Rate-limit state shared by all requests from this client.
    rate_limiter: Arc<RateLimiter>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &RiotConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Riot API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_host: config.api_host().cloned(),
            timeout: config.timeout(),
            retry_policy: config.retry_policy().clone(),
            default_headers,
            rate_limiter: Arc::new(RateLimiter::new(config.rate_limits())),
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the rate limiter shared by this client's requests.
    #[must_use]
    pub const fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.rate_limiter
    }

    /// Returns the URL a request is sent to, after any `api_host` override.
    #[must_use]
    pub fn resolve_url(&self, url: &str) -> String {
        let Some(host) = &self.api_host else {
            return url.to_string();
        };

        let path = url
            .split_once("://")
            .and_then(|(_, rest)| rest.find('/').map(|i| &rest[i..]))
            .unwrap_or_default();
        format!("{}{path}", host.as_ref())
    }

    /// Sends an HTTP request to the Riot API.
    ///
    /// Each attempt first waits for rate-limit budget, then sends the request
    /// under the per-attempt timeout. Timeouts, 429, 5xx and connection
    /// failures are retried with exponential backoff (a 429 `Retry-After`
    /// takes precedence) until the retry budget runs out. Any other non-2xx
    /// status is returned immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A permanent non-2xx response is received (`Response`)
    /// - Transient failures exhaust the retry budget (`MaxRetries`)
    /// - The request's cancellation token fires (`Cancelled`)
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = build_url(&self.resolve_url(&request.url), &request.query);
        let timeout = request.timeout.unwrap_or(self.timeout);
        let max_attempts = request
            .max_retries
            .map_or_else(|| self.retry_policy.max_attempts(), |r| r.saturating_add(1));
        let method_key = request.rate_limit_key.as_deref();
        let limit_host = Self::routing_host(&request.url);
        let cancellation = &request.cancellation;

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            self.rate_limiter
                .acquire(limit_host, method_key, cancellation)
                .await?;

            tracing::debug!(method = %request.http_method, url = %url, attempt, "Sending request");

            let outcome = tokio::select! {
                biased;
                () = cancellation.cancelled() => return Err(HttpError::Cancelled),
                outcome = tokio::time::timeout(timeout, self.send_once(request, &url, &headers)) => outcome,
            };

            let failure = match outcome {
                Err(_) => TransientError::Timeout { timeout },
                Ok(Err(e)) if e.is_timeout() => TransientError::Timeout { timeout },
                Ok(Err(e)) => TransientError::Network(e.to_string()),
                Ok(Ok(response)) => {
                    self.rate_limiter
                        .update_from_response(limit_host, method_key, &response);
                    if response.is_ok() {
                        return Ok(response);
                    }
                    Self::classify(&response)?
                }
            };

            if !self.retry_policy.retries(&failure) || attempt >= max_attempts {
                tracing::warn!(url = %url, attempts = attempt, "Request failed: {failure}");
                return Err(MaxHttpRetriesExceededError {
                    attempts: attempt,
                    last: failure,
                }
                .into());
            }

            let delay = self.retry_delay(attempt, &failure);
            tracing::debug!(
                url = %url,
                attempt,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying after transient failure: {failure}"
            );

            tokio::select! {
                biased;
                () = cancellation.cancelled() => return Err(HttpError::Cancelled),
                () = tokio::time::sleep(delay) => {}
            }
        }
    }

    /// Returns the host a request is routed to, before any `api_host`
    /// override. Rate limits are tracked per routing host.
    fn routing_host(url: &str) -> &str {
        let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
        rest.split(['/', '?']).next().unwrap_or(rest)
    }

    /// Sends a single attempt and reads the whole body.
    async fn send_once(
        &self,
        request: &HttpRequest,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, reqwest::Error> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
        };

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Splits a non-2xx response into a transient failure or a permanent error.
    fn classify(response: &HttpResponse) -> Result<TransientError, HttpResponseError> {
        if response.is_rate_limited() {
            return Ok(TransientError::RateLimited {
                limit_type: response
                    .rate_limit_type
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: response.error_message(),
                retry_after: response.retry_after,
            });
        }

        if response.is_server_error() {
            return Ok(TransientError::Server {
                code: response.code,
                message: response.error_message(),
            });
        }

        Err(HttpResponseError {
            code: response.code,
            message: response.error_message(),
            body: response.body.clone(),
        })
    }

    /// Calculates the delay before the next attempt.
    fn retry_delay(&self, attempt: u32, failure: &TransientError) -> Duration {
        if let TransientError::RateLimited {
            retry_after: Some(retry_after),
            ..
        } = failure
        {
            return *retry_after;
        }

        let backoff = self.retry_policy.backoff(attempt);
        let jitter_ms = u64::try_from(self.retry_policy.base_delay.as_millis() / 2).unwrap_or(0);
        if jitter_ms == 0 {
            return backoff;
        }
        let jitter = Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms));
        (backoff + jitter).min(self.retry_policy.max_backoff.max(backoff))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
