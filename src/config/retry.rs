//! Retry policy for transient request failures.

use std::time::Duration;

use crate::clients::TransientError;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// Upper bound for a single backoff delay.
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Controls how the executor retries transient failures.
///
/// A request is attempted at most `max_retries + 1` times. Between attempts
/// the executor sleeps `base_delay * 2^(attempt - 1)`, capped at `max_backoff`,
/// unless a 429 response carried a `Retry-After` header.
///
/// Each class of transient failure can be switched off; a disabled class is
/// surfaced to the caller on its first occurrence.
///
/// # Example
///
/// ```rust
/// use riot_api::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy {
///     max_retries: 5,
///     retry_on_timeout: false,
///     ..RetryPolicy::default()
/// };
///
/// assert_eq!(policy.backoff(1), Duration::from_secs(1));
/// assert_eq!(policy.backoff(3), Duration::from_secs(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubles for each subsequent retry.
    pub base_delay: Duration,
    /// Cap applied to every computed backoff delay.
    pub max_backoff: Duration,
    /// Retry when an attempt exceeds its timeout.
    pub retry_on_timeout: bool,
    /// Retry on HTTP 429.
    pub retry_on_rate_limit: bool,
    /// Retry on HTTP 5xx.
    pub retry_on_server_error: bool,
    /// Retry on connection resets, DNS failures and other transport errors.
    pub retry_on_connection_failure: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
            max_backoff: DEFAULT_MAX_BACKOFF,
            retry_on_timeout: true,
            retry_on_rate_limit: true,
            retry_on_server_error: true,
            retry_on_connection_failure: true,
        }
    }
}

impl RetryPolicy {
    /// Returns the backoff delay to wait after the given (1-based) failed attempt.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay
            .saturating_mul(1_u32 << exponent)
            .min(self.max_backoff)
    }

    /// Returns `true` if this class of transient failure should be retried.
    #[must_use]
    pub const fn retries(&self, failure: &TransientError) -> bool {
        match failure {
            TransientError::Timeout { .. } => self.retry_on_timeout,
            TransientError::RateLimited { .. } => self.retry_on_rate_limit,
            TransientError::Server { .. } => self.retry_on_server_error,
            TransientError::Network(_) => self.retry_on_connection_failure,
        }
    }

    /// Total number of attempts permitted for one request.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}
