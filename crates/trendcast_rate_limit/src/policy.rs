//! Attempt count and doubling backoff schedule.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};
use trendcast_error::RetryableError;

/// Bounded retry on rate limiting with deterministic exponential backoff.
///
/// Deserializes from TOML:
///
/// ```toml
/// max_attempts = 3
/// base_delay_ms = 1000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,

    /// Delay after the first refusal; doubles after each further one
    #[serde(default = "default_base_delay_ms")]
    base_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with explicit parameters.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay_ms: base_delay.as_millis() as u64,
        }
    }

    /// Total attempts, including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay slept after the first rate-limited attempt.
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// The delay slept after each rate-limited attempt, one per attempt.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        let base = self.base_delay();
        (0..self.max_attempts).map(move |attempt| {
            let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
            base.saturating_mul(factor)
        })
    }

    /// Run `operation` until it succeeds, fails with something other than a
    /// rate limit, or the attempts run out.
    ///
    /// Returns `Ok(None)` when every attempt was rate limited. A delay is
    /// slept after every refusal, the last one included. At least one
    /// attempt is always made.
    #[instrument(
        skip_all,
        fields(max_attempts = self.max_attempts, base_delay_ms = self.base_delay_ms)
    )]
    pub async fn execute<T, E, F, Fut>(&self, mut operation: F) -> Result<Option<T>, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: RetryableError + Display,
    {
        let attempts = self.max_attempts.max(1) as usize;
        let delays: Vec<Duration> = self.delays().collect();
        let mut attempt = 0usize;

        // Retries sleep between attempts; the delay after the last refusal
        // is slept below.
        let result = Retry::spawn(delays.clone().into_iter().take(attempts - 1), || {
            attempt += 1;
            let current = attempt;
            let delay_ms = delays
                .get(current - 1)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default();
            let pending = operation();
            async move {
                match pending.await {
                    Ok(value) => {
                        debug!(attempt = current, "Operation succeeded");
                        Ok(value)
                    }
                    Err(e) if e.is_rate_limited() => {
                        warn!(
                            attempt = current,
                            delay_ms,
                            error = %e,
                            "Rate limit reached, backing off"
                        );
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                    Err(e) => Err(RetryError::Permanent(e)),
                }
            }
        })
        .await;

        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_rate_limited() => {
                if let Some(delay) = delays.get(attempts - 1) {
                    tokio::time::sleep(*delay).await;
                }
                warn!(
                    max_attempts = self.max_attempts,
                    "Rate limit persisted through every attempt"
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
