//! Publishing error types.

use crate::RetryableError;

/// Publishing failure conditions.
///
/// Provider-reported failures arrive inside a successful JSON body and are
/// not errors at this level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PublishErrorKind {
    /// Connection or protocol failure
    #[display("Publish request failed: {}", _0)]
    Transport(String),
    /// Response body was not JSON
    #[display("Publish response was not JSON: {}", _0)]
    MalformedResponse(String),
}

/// Publishing error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The error kind
    pub kind: PublishErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl RetryableError for PublishError {
    fn is_retryable(&self) -> bool {
        matches!(self.kind, PublishErrorKind::Transport(_))
    }
}
