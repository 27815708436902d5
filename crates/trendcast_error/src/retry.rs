//! Classification of failures for retry decisions.

/// Trait for errors that support retry logic.
///
/// Separates three conditions callers care about:
/// - rate limited: the service refused because of quota, back off and retry
/// - retryable transport: the request may succeed if sent again
/// - everything else (malformed responses, client errors): permanent
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable), 429 (rate limit),
    /// or network failures return true. Malformed responses and other
    /// client errors return false.
    fn is_retryable(&self) -> bool;

    /// Returns true if the remote service signaled quota exhaustion.
    fn is_rate_limited(&self) -> bool {
        false
    }
}
