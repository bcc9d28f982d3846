//! Typed API client for the League of Legends API.
//!
//! This module provides the [`RiotClient`] facade built on top of the
//! [`HttpClient`](crate::clients::HttpClient). Endpoint methods (in
//! [`crate::rest::resources`]) are thin wrappers around its generic
//! [`RiotClient::execute`], which turns an endpoint description into a
//! validated request, runs it through the executor and deserializes the body.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RiotClient`]: The client with generic `execute()`, `get()`, `post()`, `put()` methods
//! - [`RequestOptions`]: Per-call platform, cancellation, retry and timeout overrides
//! - [`ApiError`]: Error type for typed calls
//!
//! # Example
//!
//! ```rust,ignore
//! use riot_api::{ApiKey, RequestOptions, RiotClient, RiotConfig};
//!
//! let config = RiotConfig::builder()
//!     .api_key(ApiKey::new("RGAPI-0000")?)
//!     .build()?;
//! let client = RiotClient::new(config)?;
//!
//! let game = client.get_match(2_734_251_123, RequestOptions::new()).await?;
//! println!("Duration: {}s", game.game_duration);
//! ```
//!
//! # Retry Behavior
//!
//! Requests are attempted up to `max_retries + 1` times (3 retries by
//! default). Timeouts, 429, 5xx and connection failures are retried with
//! exponential backoff; a 429 `Retry-After` header takes precedence. Other
//! 4xx responses fail immediately.

mod client;
mod errors;

pub use client::{RequestOptions, RiotClient};
pub use errors::ApiError;
