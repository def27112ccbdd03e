//! Sliding-window rate limiting for outbound requests
//!
//! Each pipeline owns one `RateLimiter` instance; the search and fetch
//! budgets are independent and never share state. The window is an ordered
//! sequence of request timestamps, pruned on every acquisition attempt
//! rather than eagerly on a timer.

use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Length of the trailing window over which requests are counted
const WINDOW: Duration = Duration::from_secs(60);

/// Sliding-window rate limiter
///
/// `acquire` suspends the calling task until issuing one more request would
/// not exceed the configured budget within the trailing 60-second window.
/// Bursts up to the limit are admitted instantly; past the limit the wait is
/// proportional to the age of the oldest in-window request, not a fixed
/// per-request delay.
#[derive(Debug)]
pub struct RateLimiter {
    requests_per_minute: usize,
    window: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter admitting `requests_per_minute` requests per
    /// trailing 60-second window.
    pub fn new(requests_per_minute: u32) -> Self {
        Self {
            requests_per_minute: requests_per_minute as usize,
            window: Mutex::new(VecDeque::new()),
        }
    }

    /// Waits until a request may be issued, then records its timestamp.
    ///
    /// The prune-check-wait-append sequence runs under a single lock, so two
    /// concurrent callers can never both observe an under-budget window and
    /// race past the quota.
    pub async fn acquire(&self) {
        let mut window = self.window.lock().await;

        let now = Instant::now();
        Self::prune(&mut window, now);

        if window.len() >= self.requests_per_minute {
            if let Some(&oldest) = window.front() {
                let wait = WINDOW.saturating_sub(now - oldest);
                if !wait.is_zero() {
                    tracing::debug!("Rate limit reached, waiting {:?}", wait);
                    tokio::time::sleep(wait).await;
                }
            }
            Self::prune(&mut window, Instant::now());
        }

        window.push_back(Instant::now());
    }

    /// Drops entries that have aged out of the trailing window
    fn prune(window: &mut VecDeque<Instant>, now: Instant) {
        while window.front().map_or(false, |&t| now - t >= WINDOW) {
            window.pop_front();
        }
    }

    #[cfg(test)]
    async fn window_len(&self) -> usize {
        self.window.lock().await.len()
    }
}
