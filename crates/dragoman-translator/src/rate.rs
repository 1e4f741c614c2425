//! Request pacing against a rolling-window quota

use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Paces requests so that at most `quota` issue timestamps fall inside any
/// rolling window.
///
/// Driven serially by one translator: `acquire` suspends the caller just
/// long enough for the oldest recorded request to age out of the window,
/// evicts it, then records the new issue timestamp. Aged-out entries are
/// always evicted before the next admission decision. The limiter never
/// errors and never retries anything; a delay is its only effect.
#[derive(Debug)]
pub struct RateLimiter {
    quota: usize,
    window: Duration,
    timeline: Vec<Instant>,
}

impl RateLimiter {
    /// Create a limiter admitting `quota` requests per `window`.
    ///
    /// Any safety margin is the caller's to fold into `window`.
    pub fn new(quota: usize, window: Duration) -> Self {
        Self {
            quota: quota.max(1),
            window,
            timeline: Vec::new(),
        }
    }

    /// Suspend until one more request may be issued, then record it.
    pub async fn acquire(&mut self) {
        if self.timeline.len() >= self.quota {
            let age = self.timeline[0].elapsed();
            if age < self.window {
                let wait = self.window - age;
                debug!(wait_ms = wait.as_millis() as u64, "quota reached, sleeping");
                sleep(wait).await;
            }
            // keep the newest quota-1 entries so the push below restores
            // the cap exactly
            let evict = self.timeline.len() + 1 - self.quota;
            self.timeline.drain(..evict);
        }
        self.timeline.push(Instant::now());
    }

    /// Requests admitted per window
    pub fn quota(&self) -> usize {
        self.quota
    }

    /// Rolling window length
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Recorded issue timestamps, oldest first
    pub fn timeline(&self) -> &[Instant] {
        &self.timeline
    }
}
