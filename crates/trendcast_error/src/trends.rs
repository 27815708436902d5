//! Trends service error types.

use crate::RetryableError;

/// Trends-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TrendsErrorKind {
    /// The trends service answered 429
    #[display("Trends service rate limit reached")]
    RateLimited,
    /// Non-success status other than 429
    #[display("Trends service returned HTTP {}: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Connection or protocol failure before a response arrived
    #[display("Trends request failed: {}", _0)]
    Transport(String),
    /// Response body could not be interpreted
    #[display("Malformed trends response: {}", _0)]
    MalformedResponse(String),
}

/// Trends error with source location tracking.
///
/// # Examples
///
/// ```
/// use trendcast_error::{RetryableError, TrendsError, TrendsErrorKind};
///
/// let err = TrendsError::new(TrendsErrorKind::RateLimited);
/// assert!(err.is_rate_limited());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Trends Error: {} at line {} in {}", kind, line, file)]
pub struct TrendsError {
    /// The kind of error that occurred
    pub kind: TrendsErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TrendsError {
    /// Create a new TrendsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TrendsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl RetryableError for TrendsError {
    fn is_retryable(&self) -> bool {
        match &self.kind {
            TrendsErrorKind::RateLimited | TrendsErrorKind::Transport(_) => true,
            TrendsErrorKind::Http { status_code, .. } => *status_code >= 500,
            TrendsErrorKind::MalformedResponse(_) => false,
        }
    }

    fn is_rate_limited(&self) -> bool {
        self.kind == TrendsErrorKind::RateLimited
    }
}
