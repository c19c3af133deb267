//! Best-effort per-IP rate limiting.
//!
//! Fixed-window counters in process memory. Deliberately not distributed:
//! the original deployment is a single process, and losing counters on
//! restart is acceptable for this widget.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Map size above which stale buckets are swept on the next check.
const SWEEP_THRESHOLD: usize = 1024;

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Limited,
}

struct Bucket {
    count: u32,
    window_start: Instant,
}

/// Fixed-window request counter keyed by client IP.
pub struct RateLimiter {
    max: u32,
    window: Duration,
    buckets: RwLock<HashMap<IpAddr, Bucket>>,
}

impl RateLimiter {
    /// Create a limiter allowing `max` requests per `window`.
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            buckets: RwLock::new(HashMap::new()),
        }
    }

    /// Count a request from `ip` and decide whether it may proceed.
    pub async fn check(&self, ip: IpAddr) -> Decision {
        let now = Instant::now();
        let mut buckets = self.buckets.write().await;

        if buckets.len() > SWEEP_THRESHOLD {
            let window = self.window;
            buckets.retain(|_, b| now.duration_since(b.window_start) < window);
        }

        let bucket = buckets.entry(ip).or_insert(Bucket {
            count: 0,
            window_start: now,
        });
        if now.duration_since(bucket.window_start) >= self.window {
            bucket.count = 0;
            bucket.window_start = now;
        }
        bucket.count += 1;

        if bucket.count > self.max {
            Decision::Limited
        } else {
            Decision::Allowed
        }
    }
}
