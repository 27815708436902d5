//! Trends lookup with bounded backoff.

use std::sync::Arc;
use tracing::{info, instrument, warn};
use trendcast_core::TrendKeywords;
use trendcast_error::TrendcastResult;
use trendcast_interface::TrendsSource;
use trendcast_rate_limit::RetryPolicy;

/// Fetches related top queries, retrying while the service rate limits.
///
/// Exhausting every attempt is a soft failure: the lookup yields
/// [`TrendKeywords::unavailable`]. Any other error is returned.
#[derive(Clone)]
pub struct TrendsLookup {
    source: Arc<dyn TrendsSource>,
    policy: RetryPolicy,
}

impl std::fmt::Debug for TrendsLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrendsLookup")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl TrendsLookup {
    /// Wrap a source with a backoff policy.
    pub fn new(source: Arc<dyn TrendsSource>, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    /// Backoff policy in use.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Top related queries for `keyword`.
    #[instrument(skip(self))]
    pub async fn fetch_trending_keywords(&self, keyword: &str) -> TrendcastResult<TrendKeywords> {
        let source = self.source.as_ref();
        match self
            .policy
            .execute(|| source.related_top_queries(keyword))
            .await?
        {
            Some(keywords) => {
                info!(count = keywords.len(), "Trends lookup complete");
                Ok(TrendKeywords::found(keywords))
            }
            None => {
                warn!("Trends unavailable after repeated rate limiting");
                Ok(TrendKeywords::unavailable())
            }
        }
    }
}
