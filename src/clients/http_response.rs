//! HTTP response types for the Riot API SDK.
//!
//! This module provides the [`HttpResponse`] type and the rate-limit header
//! types parsed from every response.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Header carrying the application rate limits (e.g., `20:1,100:120`).
pub const APP_RATE_LIMIT_HEADER: &str = "x-app-rate-limit";
/// Header carrying the application usage per window (e.g., `3:1,3:120`).
pub const APP_RATE_LIMIT_COUNT_HEADER: &str = "x-app-rate-limit-count";
/// Header carrying the per-method rate limits.
pub const METHOD_RATE_LIMIT_HEADER: &str = "x-method-rate-limit";
/// Header carrying the per-method usage per window.
pub const METHOD_RATE_LIMIT_COUNT_HEADER: &str = "x-method-rate-limit-count";
/// Header naming which limit a 429 was issued for.
pub const RATE_LIMIT_TYPE_HEADER: &str = "x-rate-limit-type";
/// Header carrying the number of seconds to wait after a 429.
pub const RETRY_AFTER_HEADER: &str = "retry-after";

/// A rate-limit window: at most `limit` requests per `window`.
///
/// # Example
///
/// ```rust
/// use riot_api::clients::RateLimitWindow;
/// use std::time::Duration;
///
/// let windows = RateLimitWindow::parse_header("20:1,100:120").unwrap();
/// assert_eq!(windows[0], RateLimitWindow::new(20, Duration::from_secs(1)));
/// assert_eq!(windows[1].to_string(), "100:120");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RateLimitWindow {
    /// Maximum number of requests in the window.
    pub limit: u32,
    /// Length of the window.
    pub window: Duration,
}

impl RateLimitWindow {
    /// Creates a new window.
    #[must_use]
    pub const fn new(limit: u32, window: Duration) -> Self {
        Self { limit, window }
    }

    /// Parses a `value:seconds` list as found in the rate-limit headers.
    ///
    /// Returns `None` if any entry is malformed or the list is empty.
    #[must_use]
    pub fn parse_header(header_value: &str) -> Option<Vec<Self>> {
        let windows = header_value
            .split(',')
            .map(|entry| {
                let (value, seconds) = entry.trim().split_once(':')?;
                let value = value.trim().parse().ok()?;
                let seconds: u64 = seconds.trim().parse().ok()?;
                Some(Self::new(value, Duration::from_secs(seconds)))
            })
            .collect::<Option<Vec<_>>>()?;

        if windows.is_empty() {
            None
        } else {
            Some(windows)
        }
    }
}

impl fmt::Display for RateLimitWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.limit, self.window.as_secs())
    }
}

/// Usage reported by the server for one window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitUsage {
    /// The window and its limit.
    pub window: RateLimitWindow,
    /// Requests already counted against the window.
    pub count: u32,
}

/// A limits header joined with its count header by window length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RateLimitStatus {
    /// One entry per window in the limits header.
    pub usage: Vec<RateLimitUsage>,
}

impl RateLimitStatus {
    /// Joins a limits header value with its count header value.
    ///
    /// A window missing from the count header is treated as unused.
    #[must_use]
    pub fn parse(limits: &str, counts: Option<&str>) -> Option<Self> {
        let limits = RateLimitWindow::parse_header(limits)?;
        let counts = counts
            .and_then(RateLimitWindow::parse_header)
            .unwrap_or_default();

        let usage = limits
            .into_iter()
            .map(|window| RateLimitUsage {
                window,
                count: counts
                    .iter()
                    .find(|c| c.window == window.window)
                    .map_or(0, |c| c.limit),
            })
            .collect();

        Some(Self { usage })
    }
}

/// An HTTP response from the Riot API.
///
/// Contains the response status code, headers, raw body, and the parsed
/// rate-limit headers.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Application rate-limit usage.
    pub app_rate_limit: Option<RateLimitStatus>,
    /// Per-method rate-limit usage.
    pub method_rate_limit: Option<RateLimitStatus>,
    /// Which limit a 429 was issued for (`application`, `method` or `service`).
    pub rate_limit_type: Option<String>,
    /// How long to wait before retrying (from `Retry-After`).
    pub retry_after: Option<Duration>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let app_rate_limit = first(APP_RATE_LIMIT_HEADER)
            .and_then(|limits| RateLimitStatus::parse(limits, first(APP_RATE_LIMIT_COUNT_HEADER)));
        let method_rate_limit = first(METHOD_RATE_LIMIT_HEADER).and_then(|limits| {
            RateLimitStatus::parse(limits, first(METHOD_RATE_LIMIT_COUNT_HEADER))
        });
        let rate_limit_type = first(RATE_LIMIT_TYPE_HEADER).map(str::to_lowercase);
        let retry_after = first(RETRY_AFTER_HEADER)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok());

        Self {
            code,
            headers,
            body,
            app_rate_limit,
            method_rate_limit,
            rate_limit_type,
            retry_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for HTTP 429.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.code == 429
    }

    /// Returns `true` for any 5xx status.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500 && self.code <= 599
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the error message carried by a Riot error body.
    ///
    /// Error bodies look like `{"status": {"message": "...", "status_code": 404}}`.
    /// Falls back to the raw body, then to the status code.
    #[must_use]
    pub fn error_message(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|value| {
                value
                    .pointer("/status/message")
                    .and_then(serde_json::Value::as_str)
                    .map(ToString::to_string)
            })
            .or_else(|| {
                let trimmed = self.body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| format!("HTTP {}", self.code))
    }
}
