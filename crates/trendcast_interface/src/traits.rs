//! Trait definitions for remote service clients.

use async_trait::async_trait;
use trendcast_core::PublishRequest;
use trendcast_error::{TrendcastResult, TrendsError};

/// A generative-language model answering single-shot prompts.
///
/// No conversation state is kept between calls.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Send one prompt and return the raw text answer.
    async fn generate_text(&self, prompt: &str) -> TrendcastResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// One attempt at a related-queries lookup.
///
/// Implementations report quota exhaustion as
/// [`TrendsErrorKind::RateLimited`](trendcast_error::TrendsErrorKind::RateLimited)
/// and leave retrying to the caller.
#[async_trait]
pub trait TrendsSource: Send + Sync {
    /// Top related queries for `keyword`, or an empty list when the service
    /// has none.
    async fn related_top_queries(&self, keyword: &str) -> Result<Vec<String>, TrendsError>;
}

/// Finds a photo URL for a query.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    /// Always yields a URL; failures collapse to a fixed fallback.
    async fn resolve_image(&self, query: &str) -> String;
}

/// Forwards a finished post to a publishing provider.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish and return the provider's JSON body untouched.
    async fn publish(&self, request: &PublishRequest) -> TrendcastResult<serde_json::Value>;
}
