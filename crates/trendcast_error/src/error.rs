//! Top-level error wrapper types.

use crate::{
    ConfigError, GeminiError, PublishError, RetryableError, ServerError, TrendsError,
    UnsplashError,
};

/// Every failure a Trendcast operation can surface.
///
/// # Examples
///
/// ```
/// use trendcast_error::{PublishError, PublishErrorKind, TrendcastError};
///
/// let publish_err = PublishError::new(PublishErrorKind::Transport("reset".into()));
/// let err: TrendcastError = publish_err.into();
/// assert!(format!("{}", err).contains("Publish Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TrendcastErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Generative model error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Trends lookup error
    #[from(TrendsError)]
    Trends(TrendsError),
    /// Image search error
    #[from(UnsplashError)]
    Unsplash(UnsplashError),
    /// Publishing error
    #[from(PublishError)]
    Publish(PublishError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Trendcast error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Trendcast Error: {}", _0)]
pub struct TrendcastError(Box<TrendcastErrorKind>);

impl TrendcastError {
    /// Create a new error from a kind.
    pub fn new(kind: TrendcastErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TrendcastErrorKind {
        &self.0
    }
}

impl RetryableError for TrendcastError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            TrendcastErrorKind::Gemini(e) => e.is_retryable(),
            TrendcastErrorKind::Trends(e) => e.is_retryable(),
            TrendcastErrorKind::Publish(e) => e.is_retryable(),
            _ => false,
        }
    }

    fn is_rate_limited(&self) -> bool {
        match self.kind() {
            TrendcastErrorKind::Gemini(e) => e.is_rate_limited(),
            TrendcastErrorKind::Trends(e) => e.is_rate_limited(),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to TrendcastErrorKind
impl<T> From<T> for TrendcastError
where
    T: Into<TrendcastErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Trendcast operations.
pub type TrendcastResult<T> = std::result::Result<T, TrendcastError>;
