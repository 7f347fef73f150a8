//! Cache policy shared by every query in the app

use std::time::Duration;

/// How long fetched data counts as fresh.
pub const STALE_TIME: Duration = Duration::from_secs(5 * 60);
/// How long unused data is kept before eviction.
pub const CACHE_TIME: Duration = Duration::from_secs(10 * 60);
/// Retries after the first failed attempt.
pub const RETRY: u32 = 2;

const RETRY_BASE_DELAY: Duration = Duration::from_millis(1000);
const RETRY_MAX_DELAY: Duration = Duration::from_secs(30);

/// Delay between failed attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDelay {
    /// `min(base * 2^attempt, max)`
    Exponential { base: Duration, max: Duration },
    Fixed(Duration),
}

impl Default for RetryDelay {
    fn default() -> Self {
        RetryDelay::Exponential {
            base: RETRY_BASE_DELAY,
            max: RETRY_MAX_DELAY,
        }
    }
}

impl RetryDelay {
    /// Delay before retry number `attempt` (0 for the first retry).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match *self {
            RetryDelay::Fixed(delay) => delay,
            RetryDelay::Exponential { base, max } => {
                let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
                base.checked_mul(factor).map_or(max, |delay| delay.min(max))
            }
        }
    }
}

/// Default options applied to every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub stale_time: Duration,
    pub cache_time: Duration,
    pub retry: u32,
    pub retry_delay: RetryDelay,
    pub refetch_on_window_focus: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: STALE_TIME,
            cache_time: CACHE_TIME,
            retry: RETRY,
            retry_delay: RetryDelay::default(),
            refetch_on_window_focus: false,
        }
    }
}

impl QueryOptions {
    /// Total attempts a fetch may make, including the first.
    pub fn max_attempts(&self) -> u32 {
        self.retry.saturating_add(1)
    }
}
