//! Configuration types for the Riot API SDK.
//!
//! This module provides the configuration used to construct a client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RiotConfig`]: The main configuration struct holding all SDK settings
//! - [`RiotConfigBuilder`]: A builder for constructing [`RiotConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`HostUrl`]: A validated base URL override
//! - [`PlatformId`] and [`Region`]: Game server shards and tournament regions
//! - [`RetryPolicy`]: Retry and backoff settings
//!
//! # Example
//!
//! ```rust
//! use riot_api::{RiotConfig, ApiKey, PlatformId};
//!
//! let config = RiotConfig::builder()
//!     .api_key(ApiKey::new("RGAPI-0000").unwrap())
//!     .platform(PlatformId::Euw1)
//!     .max_retries(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.platform(), PlatformId::Euw1);
//! ```

mod newtypes;
mod platform;
mod retry;

pub use newtypes::{ApiKey, HostUrl};
pub use platform::{host_for, region_for, PlatformId, Region, GLOBAL_HOST};
pub use retry::{RetryPolicy, DEFAULT_BASE_DELAY, DEFAULT_MAX_BACKOFF, DEFAULT_MAX_RETRIES};

use std::time::Duration;

use crate::clients::RateLimitWindow;
use crate::error::ConfigError;

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Riot API SDK.
///
/// Holds the API key, the default platform used when a call does not
/// name one, retry and timeout settings, and optional rate-limit windows
/// known ahead of the first response.
///
/// # Thread Safety
///
/// `RiotConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct RiotConfig {
    api_key: ApiKey,
    platform: PlatformId,
    api_host: Option<HostUrl>,
    timeout: Duration,
    retry_policy: RetryPolicy,
    rate_limits: Vec<RateLimitWindow>,
    use_tournament_stub: bool,
    user_agent_prefix: Option<String>,
}

impl RiotConfig {
    /// Creates a new builder for constructing a `RiotConfig`.
    #[must_use]
    pub fn builder() -> RiotConfigBuilder {
        RiotConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the default platform.
    #[must_use]
    pub const fn platform(&self) -> PlatformId {
        self.platform
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the per-attempt timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the application rate-limit windows known up front.
    #[must_use]
    pub fn rate_limits(&self) -> &[RateLimitWindow] {
        &self.rate_limits
    }

    /// Returns whether tournament calls go to the stub API.
    #[must_use]
    pub const fn use_tournament_stub(&self) -> bool {
        self.use_tournament_stub
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify RiotConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RiotConfig>();
};

/// Builder for constructing [`RiotConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `platform`: [`PlatformId::Na1`]
/// - `timeout`: 10 seconds per attempt
/// - `retry_policy`: [`RetryPolicy::default`] (3 retries, 1 second base delay)
/// - `rate_limits`: none (learned from response headers)
/// - `use_tournament_stub`: `false`
/// - `api_host`, `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct RiotConfigBuilder {
    api_key: Option<ApiKey>,
    platform: Option<PlatformId>,
    api_host: Option<HostUrl>,
    timeout: Option<Duration>,
    retry_policy: Option<RetryPolicy>,
    rate_limits: Vec<RateLimitWindow>,
    use_tournament_stub: bool,
    user_agent_prefix: Option<String>,
}

impl RiotConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the platform used when a call does not override it.
    #[must_use]
    pub const fn platform(mut self, platform: PlatformId) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Routes every API family through the given base URL.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the whole retry policy.
    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Sets the number of retries after the first attempt.
    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.retry_policy
            .get_or_insert_with(RetryPolicy::default)
            .max_retries = max_retries;
        self
    }

    /// Sets the delay before the first retry.
    #[must_use]
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_policy
            .get_or_insert_with(RetryPolicy::default)
            .base_delay = delay;
        self
    }

    /// Adds an application rate-limit window known ahead of time
    /// (e.g., 20 requests per second for a development key).
    #[must_use]
    pub fn rate_limit(mut self, window: RateLimitWindow) -> Self {
        self.rate_limits.push(window);
        self
    }

    /// Sends tournament calls to the stub API.
    #[must_use]
    pub const fn use_tournament_stub(mut self, stub: bool) -> Self {
        self.use_tournament_stub = stub;
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`RiotConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// and [`ConfigError::InvalidParameter`] for a zero timeout or a
    /// rate-limit window with a zero limit or duration.
    pub fn build(self) -> Result<RiotConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidParameter {
                name: "timeout",
                reason: "must be greater than zero".to_string(),
            });
        }

        if let Some(window) = self
            .rate_limits
            .iter()
            .find(|w| w.limit == 0 || w.window.is_zero())
        {
            return Err(ConfigError::InvalidParameter {
                name: "rate_limit",
                reason: format!("window {window} must have a non-zero limit and duration"),
            });
        }

        Ok(RiotConfig {
            api_key,
            platform: self.platform.unwrap_or(PlatformId::Na1),
            api_host: self.api_host,
            timeout,
            retry_policy: self.retry_policy.unwrap_or_default(),
            rate_limits: self.rate_limits,
            use_tournament_stub: self.use_tournament_stub,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("RGAPI-test").unwrap()
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = RiotConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = RiotConfig::builder().api_key(key()).build().unwrap();

        assert_eq!(config.platform(), PlatformId::Na1);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.retry_policy(), &RetryPolicy::default());
        assert!(config.rate_limits().is_empty());
        assert!(!config.use_tournament_stub());
        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("http://localhost:9999").unwrap();
        let config = RiotConfig::builder()
            .api_key(key())
            .platform(PlatformId::Kr)
            .api_host(host.clone())
            .timeout(Duration::from_secs(2))
            .max_retries(7)
            .retry_base_delay(Duration::from_millis(10))
            .rate_limit(RateLimitWindow::new(20, Duration::from_secs(1)))
            .rate_limit(RateLimitWindow::new(100, Duration::from_secs(120)))
            .use_tournament_stub(true)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.platform(), PlatformId::Kr);
        assert_eq!(config.api_host(), Some(&host));
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.retry_policy().max_retries, 7);
        assert_eq!(config.retry_policy().base_delay, Duration::from_millis(10));
        assert_eq!(config.rate_limits().len(), 2);
        assert!(config.use_tournament_stub());
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = RiotConfig::builder()
            .api_key(key())
            .timeout(Duration::ZERO)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "timeout", .. })
        ));
    }

    #[test]
    fn test_builder_rejects_empty_rate_limit_window() {
        let result = RiotConfig::builder()
            .api_key(key())
            .rate_limit(RateLimitWindow::new(0, Duration::from_secs(1)))
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "rate_limit", .. })
        ));
    }

    #[test]
    fn test_config_is_clone_and_debug_masks_key() {
        let config = RiotConfig::builder().api_key(key()).build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.api_key(), config.api_key());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("RiotConfig"));
        assert!(!debug_str.contains("RGAPI-test"));
    }
}
