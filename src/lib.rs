//! # Riot API Rust SDK
//!
//! A typed async client for the League of Legends web API, covering static
//! reference data (champions, items, runes, maps, summoner spells, realms,
//! versions) and dynamic data (champion rotation, leagues, matches, match
//! lists, timelines, tournaments).
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`RiotConfig`] and [`RiotConfigBuilder`]
//! - Platform routing through [`PlatformId`], with global-host families
//!   resolved automatically
//! - A shared HTTP executor with per-attempt timeouts, classified retries
//!   and exponential backoff
//! - Client-side rate limiting driven by the application and per-method
//!   limits the server reports, tracked per platform host
//! - Cancellation of any call through a `CancellationToken`
//! - Field selection for static-data payloads
//!
//! ## Quick Start
//!
//! ```rust
//! use riot_api::{ApiKey, PlatformId, RetryPolicy, RiotConfig};
//!
//! let config = RiotConfig::builder()
//!     .api_key(ApiKey::new("RGAPI-00000000-0000-0000-0000-000000000000").unwrap())
//!     .platform(PlatformId::Na1)
//!     .retry_policy(RetryPolicy::default())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.platform(), PlatformId::Na1);
//! ```
//!
//! ## Making API Requests
//!
//! Endpoint methods live on [`RiotClient`]. Each takes a [`RequestOptions`]
//! for per-call settings:
//!
//! ```rust,ignore
//! use riot_api::{PlatformId, RequestOptions, RiotClient};
//! use riot_api::rest::resources::RankedQueue;
//!
//! let client = RiotClient::new(config)?;
//!
//! let rotation = client.get_champions(true, &RequestOptions::new()).await?;
//! let korea = RequestOptions::new().platform(PlatformId::Kr);
//! let challenger = client.get_challenger_league(RankedQueue::Solo5x5, &korea).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every endpoint method returns [`ApiError`], which separates invalid
//! arguments, transport failures and payloads that do not match the
//! expected type:
//!
//! ```rust
//! use riot_api::{ApiError, ConfigError};
//!
//! fn describe(error: &ApiError) -> &'static str {
//!     if error.is_not_found() {
//!         "no such resource"
//!     } else if error.is_cancelled() {
//!         "cancelled"
//!     } else if let ApiError::Config(ConfigError::InvalidParameter { .. }) = error {
//!         "bad argument"
//!     } else {
//!         "request failed"
//!     }
//! }
//! ```
//!
//! ## Low-Level Requests
//!
//! The executor can also be driven directly with an [`HttpRequest`]:
//!
//! ```rust,ignore
//! use riot_api::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(
//!     HttpMethod::Get,
//!     "https://na1.api.riotgames.com/lol/platform/v3/champions",
//! )
//! .query_param("freeToPlay", "true")
//! .rate_limit_key("champion.all")
//! .build()?;
//!
//! let response = client.request(&request).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and requests validate on construction
//! - **Thread-safe**: All types are `Send + Sync`; one client serves any
//!   number of concurrent calls
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, HostUrl, PlatformId, Region, RetryPolicy, RiotConfig, RiotConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, TransientError,
};

// Re-export the endpoint facade
pub use clients::{ApiError, RequestOptions, RiotClient};
