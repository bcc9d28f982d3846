//! Client-side rate limiting.
//!
//! The [`RateLimiter`] tracks every active rate-limit window for one client,
//! separately for each routing host: the application windows (shared by all
//! calls to the host) and the per-method windows (keyed by endpoint name). Windows are seeded from configuration and learned
//! from the `X-App-Rate-Limit` / `X-Method-Rate-Limit` response headers.
//!
//! Before each attempt the executor calls [`RateLimiter::acquire`], which
//! consumes one unit of budget from every applicable window, or sleeps until
//! the most restrictive exhausted window resets. All state lives behind one
//! lock so concurrent reservations and header updates never lose updates.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::clients::errors::HttpError;
use crate::clients::http_response::{HttpResponse, RateLimitStatus, RateLimitWindow};

/// Upper bound for any reset or block instant; larger server values are clamped.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

fn deadline(now: Instant, after: Duration) -> Instant {
    now.checked_add(after.min(FAR_FUTURE)).unwrap_or(now)
}

#[derive(Debug, Clone)]
struct Window {
    limit: u32,
    duration: Duration,
    remaining: u32,
    reset_at: Instant,
}

impl Window {
    fn new(window: RateLimitWindow, now: Instant) -> Self {
        Self {
            limit: window.limit,
            duration: window.window,
            remaining: window.limit,
            reset_at: deadline(now, window.window),
        }
    }

    fn refresh(&mut self, now: Instant) {
        if now >= self.reset_at {
            self.remaining = self.limit;
            self.reset_at = deadline(now, self.duration);
        }
    }

    fn wait(&self, now: Instant) -> Duration {
        if self.remaining == 0 {
            self.reset_at.saturating_duration_since(now)
        } else {
            Duration::ZERO
        }
    }

    fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            window: RateLimitWindow::new(self.limit, self.duration),
            remaining: self.remaining,
        }
    }
}

#[derive(Debug, Default)]
struct LimiterState {
    app: Vec<Window>,
    methods: HashMap<String, Vec<Window>>,
    blocked_until: Option<Instant>,
}

impl LimiterState {
    fn seeded(seed: &[RateLimitWindow], now: Instant) -> Self {
        Self {
            app: seed.iter().map(|w| Window::new(*w, now)).collect(),
            ..Self::default()
        }
    }

    fn snapshot(&self, now: Instant) -> RateLimitSnapshot {
        RateLimitSnapshot {
            app: self.app.iter().map(Window::snapshot).collect(),
            methods: self
                .methods
                .iter()
                .map(|(name, windows)| (name.clone(), windows.iter().map(Window::snapshot).collect()))
                .collect(),
            blocked: self.blocked_until.is_some_and(|until| until > now),
        }
    }
}

/// Point-in-time view of one window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// The window and its limit.
    pub window: RateLimitWindow,
    /// Requests still permitted before the window resets.
    pub remaining: u32,
}

/// Point-in-time view of one host's limits, for diagnostics and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RateLimitSnapshot {
    /// Application windows.
    pub app: Vec<WindowSnapshot>,
    /// Per-method windows, by endpoint name.
    pub methods: BTreeMap<String, Vec<WindowSnapshot>>,
    /// Whether a 429 currently blocks all dispatches to the host.
    pub blocked: bool,
}

/// Tracks request budget across all calls made through one client.
///
/// Riot enforces limits per routing host, so every host (`na1.api.riotgames.com`,
/// `kr.api.riotgames.com`, ...) gets its own application windows, method
/// windows and 429 block. Configured windows seed each host on first use.
///
/// # Example
///
/// ```rust
/// use riot_api::clients::{RateLimiter, RateLimitWindow};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let limiter = RateLimiter::new(&[RateLimitWindow::new(2, Duration::from_secs(1))]);
///
/// assert_eq!(limiter.reserve("na1.api.riotgames.com", None), Duration::ZERO);
/// assert_eq!(limiter.reserve("na1.api.riotgames.com", None), Duration::ZERO);
/// assert!(limiter.reserve("na1.api.riotgames.com", None) > Duration::ZERO);
/// assert_eq!(limiter.reserve("kr.api.riotgames.com", None), Duration::ZERO);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RateLimiter {
    seed: Vec<RateLimitWindow>,
    hosts: Mutex<HashMap<String, LimiterState>>,
}

// Verify RateLimiter is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RateLimiter>();
};

impl RateLimiter {
    /// Creates a limiter that seeds every host with known application windows.
    #[must_use]
    pub fn new(app_windows: &[RateLimitWindow]) -> Self {
        Self {
            seed: app_windows.to_vec(),
            hosts: Mutex::new(HashMap::new()),
        }
    }

    /// Tries to take one unit of budget for a request to `method` on `host`.
    ///
    /// Returns [`Duration::ZERO`] when the request may go now; the budget is
    /// then consumed from every applicable window. Otherwise returns how long
    /// to wait for the most restrictive window, and consumes nothing.
    pub fn reserve(&self, host: &str, method: Option<&str>) -> Duration {
        let now = Instant::now();
        let mut hosts = self.hosts.lock();
        let LimiterState {
            app,
            methods,
            blocked_until,
        } = hosts
            .entry(host.to_string())
            .or_insert_with(|| LimiterState::seeded(&self.seed, now));

        let mut wait = blocked_until.map_or(Duration::ZERO, |until| {
            until.saturating_duration_since(now)
        });
        if wait.is_zero() {
            *blocked_until = None;
        }

        let method_windows = method.and_then(|m| methods.get_mut(m));
        let windows = app.iter_mut().chain(method_windows.into_iter().flatten());

        let mut applicable = Vec::new();
        for window in windows {
            window.refresh(now);
            wait = wait.max(window.wait(now));
            applicable.push(window);
        }

        if wait.is_zero() {
            for window in applicable {
                window.remaining = window.remaining.saturating_sub(1);
            }
        }

        wait
    }

    /// Waits until budget is available for `method` on `host`, then consumes it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Cancelled`] if `cancellation` fires first; no
    /// budget is consumed in that case.
    pub async fn acquire(
        &self,
        host: &str,
        method: Option<&str>,
        cancellation: &CancellationToken,
    ) -> Result<(), HttpError> {
        loop {
            if cancellation.is_cancelled() {
                return Err(HttpError::Cancelled);
            }

            let wait = self.reserve(host, method);
            if wait.is_zero() {
                return Ok(());
            }

            tracing::debug!(
                host,
                method = method.unwrap_or("-"),
                wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                "Rate limit budget exhausted, waiting for window reset"
            );

            tokio::select! {
                biased;
                () = cancellation.cancelled() => return Err(HttpError::Cancelled),
                () = tokio::time::sleep(wait) => {}
            }
        }
    }

    /// Applies the rate-limit headers of a response from `host`.
    ///
    /// Server counts only ever lower the local remaining budget, so a late
    /// response from an earlier request cannot hand out extra budget. A 429
    /// issued for the application or method limit blocks every dispatch to
    /// the host until its `Retry-After` elapses.
    pub fn update_from_response(&self, host: &str, method: Option<&str>, response: &HttpResponse) {
        let now = Instant::now();
        let mut hosts = self.hosts.lock();
        let state = hosts
            .entry(host.to_string())
            .or_insert_with(|| LimiterState::seeded(&self.seed, now));

        if let Some(status) = &response.app_rate_limit {
            merge_status(&mut state.app, status, now);
        }

        if let (Some(method), Some(status)) = (method, &response.method_rate_limit) {
            let windows = state.methods.entry(method.to_string()).or_default();
            merge_status(windows, status, now);
        }

        if response.is_rate_limited() {
            let limit_type = response.rate_limit_type.as_deref();
            if let (Some("application" | "method"), Some(retry_after)) =
                (limit_type, response.retry_after)
            {
                let until = deadline(now, retry_after);
                state.blocked_until = Some(state.blocked_until.map_or(until, |u| u.max(until)));
                tracing::warn!(
                    host,
                    limit_type = limit_type.unwrap_or_default(),
                    retry_after_ms = u64::try_from(retry_after.as_millis()).unwrap_or(u64::MAX),
                    "Rate limit exceeded, blocking dispatches"
                );
            }
        }
    }

    /// Blocks every dispatch to `host` for `duration`.
    pub fn block_for(&self, host: &str, duration: Duration) {
        let now = Instant::now();
        let until = deadline(now, duration);
        let mut hosts = self.hosts.lock();
        let state = hosts
            .entry(host.to_string())
            .or_insert_with(|| LimiterState::seeded(&self.seed, now));
        state.blocked_until = Some(state.blocked_until.map_or(until, |u| u.max(until)));
    }

    /// Returns a point-in-time view of every window tracked for `host`.
    ///
    /// A host that has not been used yet reports the configured windows at
    /// full budget.
    #[must_use]
    pub fn snapshot(&self, host: &str) -> RateLimitSnapshot {
        let now = Instant::now();
        let hosts = self.hosts.lock();
        hosts.get(host).map_or_else(
            || LimiterState::seeded(&self.seed, now).snapshot(now),
            |state| state.snapshot(now),
        )
    }
}

fn merge_status(windows: &mut Vec<Window>, status: &RateLimitStatus, now: Instant) {
    for usage in &status.usage {
        let server_remaining = usage.window.limit.saturating_sub(usage.count);
        if let Some(window) = windows
            .iter_mut()
            .find(|w| w.duration == usage.window.window)
        {
            window.refresh(now);
            window.limit = usage.window.limit;
            window.remaining = window.remaining.min(server_remaining);
        } else {
            let mut window = Window::new(usage.window, now);
            window.remaining = server_remaining;
            windows.push(window);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_response::RateLimitUsage;
    use tokio_test::{assert_pending, assert_ready_err};

    const HOST: &str = "na1.api.riotgames.com";

    fn window(limit: u32, secs: u64) -> RateLimitWindow {
        RateLimitWindow::new(limit, Duration::from_secs(secs))
    }

    fn response_with_app_usage(code: u16, usage: &[(u32, u64, u32)]) -> HttpResponse {
        let mut response = HttpResponse::new(code, HashMap::new(), String::new());
        response.app_rate_limit = Some(RateLimitStatus {
            usage: usage
                .iter()
                .map(|&(limit, secs, count)| RateLimitUsage {
                    window: window(limit, secs),
                    count,
                })
                .collect(),
        });
        response
    }

    #[tokio::test(start_paused = true)]
    async fn test_reserve_never_exceeds_window_limit() {
        let limiter = RateLimiter::new(&[window(3, 1)]);

        for _ in 0..3 {
            assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
        }
        let wait = limiter.reserve(HOST, None);
        assert!(wait > Duration::ZERO);
        assert!(wait <= Duration::from_secs(1));
        assert_eq!(limiter.snapshot(HOST).app[0].remaining, 0);

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
        assert_eq!(limiter.snapshot(HOST).app[0].remaining, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_most_restrictive_window_wins() {
        let limiter = RateLimiter::new(&[window(10, 1), window(2, 120)]);

        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);

        let wait = limiter.reserve(HOST, None);
        assert!(wait > Duration::from_secs(100));
        // A refused reservation consumes nothing
        assert_eq!(limiter.snapshot(HOST).app[0].remaining, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_header_counts_learn_and_lower_budget() {
        let limiter = RateLimiter::default();
        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);

        limiter.update_from_response(HOST, None, &response_with_app_usage(200, &[(20, 1, 1), (100, 120, 99)]));
        let snapshot = limiter.snapshot(HOST);
        assert_eq!(snapshot.app.len(), 2);
        assert_eq!(snapshot.app[0].remaining, 19);
        assert_eq!(snapshot.app[1].remaining, 1);

        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
        assert!(limiter.reserve(HOST, None) > Duration::from_secs(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_does_not_raise_budget() {
        let limiter = RateLimiter::new(&[window(5, 10)]);
        for _ in 0..4 {
            assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
        }
        // A response sent after only the first request reports count 1
        limiter.update_from_response(HOST, None, &response_with_app_usage(200, &[(5, 10, 1)]));
        assert_eq!(limiter.snapshot(HOST).app[0].remaining, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_method_windows_apply_only_to_their_method() {
        let limiter = RateLimiter::default();
        let mut response = HttpResponse::new(200, HashMap::new(), String::new());
        response.method_rate_limit = RateLimitStatus::parse("1:10", Some("1:10"));
        limiter.update_from_response(HOST, Some("match.get"), &response);

        assert!(limiter.reserve(HOST, Some("match.get")) > Duration::ZERO);
        assert_eq!(limiter.reserve(HOST, Some("league.master")), Duration::ZERO);
        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
        assert!(limiter.snapshot(HOST).methods.contains_key("match.get"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_application_429_blocks_until_retry_after() {
        let limiter = RateLimiter::default();
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["3".to_string()]);
        headers.insert("x-rate-limit-type".to_string(), vec!["application".to_string()]);
        limiter.update_from_response(HOST, None, &HttpResponse::new(429, headers, String::new()));

        assert!(limiter.snapshot(HOST).blocked);
        let wait = limiter.reserve(HOST, Some("anything"));
        assert!(wait > Duration::from_secs(2));

        tokio::time::advance(Duration::from_secs(3)).await;
        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
        assert!(!limiter.snapshot(HOST).blocked);
    }

    #[tokio::test(start_paused = true)]
    async fn test_service_429_does_not_block() {
        let limiter = RateLimiter::default();
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["3".to_string()]);
        headers.insert("x-rate-limit-type".to_string(), vec!["service".to_string()]);
        limiter.update_from_response(HOST, None, &HttpResponse::new(429, headers, String::new()));

        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_window_header_is_clamped() {
        let limiter = RateLimiter::default();
        let mut headers = HashMap::new();
        headers.insert(
            "x-app-rate-limit".to_string(),
            vec!["20:18446744073709551615".to_string()],
        );
        headers.insert(
            "x-app-rate-limit-count".to_string(),
            vec!["20:18446744073709551615".to_string()],
        );
        limiter.update_from_response(HOST, None, &HttpResponse::new(200, headers, String::new()));

        let wait = limiter.reserve(HOST, None);
        assert!(wait > Duration::ZERO);
        assert!(wait <= FAR_FUTURE);

        // Refreshing an exhausted window must not overflow either
        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(limiter.reserve(HOST, None) > Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_retry_after_is_clamped() {
        let limiter = RateLimiter::default();
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["1e19".to_string()]);
        headers.insert("x-rate-limit-type".to_string(), vec!["method".to_string()]);
        let response = HttpResponse::new(429, headers, String::new());
        assert!(response.retry_after.is_some());

        limiter.update_from_response(HOST, None, &response);
        assert!(limiter.snapshot(HOST).blocked);
        assert!(limiter.reserve(HOST, None) <= FAR_FUTURE);

        limiter.block_for(HOST, Duration::MAX);
        assert!(limiter.reserve(HOST, None) <= FAR_FUTURE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hosts_keep_separate_budgets() {
        let limiter = RateLimiter::new(&[window(1, 10)]);
        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
        assert!(limiter.reserve(HOST, None) > Duration::ZERO);

        // Another platform starts from the configured budget
        assert_eq!(limiter.reserve("kr.api.riotgames.com", None), Duration::ZERO);
        assert_eq!(limiter.snapshot("euw1.api.riotgames.com").app[0].remaining, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_application_429_blocks_only_its_host() {
        let limiter = RateLimiter::default();
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["30".to_string()]);
        headers.insert("x-rate-limit-type".to_string(), vec!["application".to_string()]);
        limiter.update_from_response(
            "kr.api.riotgames.com",
            None,
            &HttpResponse::new(429, headers, String::new()),
        );

        assert!(limiter.snapshot("kr.api.riotgames.com").blocked);
        assert!(limiter.reserve("kr.api.riotgames.com", None) > Duration::ZERO);
        assert!(!limiter.snapshot(HOST).blocked);
        assert_eq!(limiter.reserve(HOST, None), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_acquire_waits_for_reset() {
        let limiter = RateLimiter::new(&[window(1, 1)]);
        let token = CancellationToken::new();

        limiter.acquire(HOST, None, &token).await.unwrap();
        let started = Instant::now();
        limiter.acquire(HOST, None, &token).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_acquire_leaves_state_unmodified() {
        let limiter = RateLimiter::new(&[window(1, 60)]);
        let token = CancellationToken::new();
        limiter.acquire(HOST, None, &token).await.unwrap();
        let before = limiter.snapshot(HOST);

        let waiting = CancellationToken::new();
        let mut acquire = tokio_test::task::spawn(limiter.acquire(HOST, None, &waiting));
        assert_pending!(acquire.poll());

        waiting.cancel();
        assert!(acquire.is_woken());
        let err = assert_ready_err!(acquire.poll());
        assert!(err.is_cancelled());
        drop(acquire);

        assert_eq!(limiter.snapshot(HOST), before);
    }

    #[tokio::test]
    async fn test_concurrent_reservations_are_not_lost() {
        let limiter = std::sync::Arc::new(RateLimiter::new(&[window(50, 60)]));
        let mut handles = Vec::new();
        for _ in 0..10 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                (0..10)
                    .filter(|_| limiter.reserve(HOST, None).is_zero())
                    .count()
            }));
        }

        let mut granted = 0;
        for handle in handles {
            granted += handle.await.unwrap();
        }
        assert_eq!(granted, 50);
        assert_eq!(limiter.snapshot(HOST).app[0].remaining, 0);
    }
}
