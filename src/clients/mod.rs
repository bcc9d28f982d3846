//! HTTP client types for Riot API communication.
//!
//! This module provides the HTTP layer every API call goes through. It
//! handles request validation, rate limiting, retries with backoff,
//! per-attempt timeouts, cancellation and rate-limit header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async request executor
//! - [`HttpRequest`]: A validated, immutable request descriptor
//! - [`HttpResponse`]: A response with its parsed rate-limit headers
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT)
//! - [`RateLimiter`]: Client-side rate-limit state shared by all calls
//! - [`rest::RiotClient`]: The typed API client
//! - [`rest::ApiError`]: Error type for typed calls
//!
//! # Example
//!
//! ```rust,ignore
//! use riot_api::{ApiKey, RiotConfig};
//! use riot_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = RiotConfig::builder()
//!     .api_key(ApiKey::new("RGAPI-0000")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(
//!     HttpMethod::Get,
//!     "https://na1.api.riotgames.com/lol/league/v3/masterleagues/by-queue/RANKED_SOLO_5x5",
//! )
//! .rate_limit_key("league.master")
//! .build()?;
//!
//! let response = client.request(&request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **Timeout**: Retried with exponential backoff
//! - **429 (Rate Limited)**: Retried after `Retry-After`, or with backoff if absent
//! - **5xx (Server Error)**: Retried with exponential backoff
//! - **Connection failures**: Retried with exponential backoff
//! - **Other errors (4xx)**: Returned immediately without retry
//!
//! Each class can be disabled through [`RetryPolicy`](crate::RetryPolicy).

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_limiter;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    TransientError,
};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{
    HttpResponse, RateLimitStatus, RateLimitUsage, RateLimitWindow, APP_RATE_LIMIT_COUNT_HEADER,
    APP_RATE_LIMIT_HEADER, METHOD_RATE_LIMIT_COUNT_HEADER, METHOD_RATE_LIMIT_HEADER,
    RATE_LIMIT_TYPE_HEADER, RETRY_AFTER_HEADER,
};
pub use rate_limiter::{RateLimitSnapshot, RateLimiter, WindowSnapshot};

// Re-export the typed client at the clients module level
pub use rest::{ApiError, RequestOptions, RiotClient};
