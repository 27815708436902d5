//! Ayrshare publishing client.

use async_trait::async_trait;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use trendcast_core::PublishRequest;
use trendcast_error::{PublishError, PublishErrorKind, TrendcastResult};
use trendcast_interface::Publisher;

/// Ayrshare endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AyrshareConfig {
    /// API root, without a trailing slash
    #[serde(default = "default_base_url")]
    base_url: String,
}

fn default_base_url() -> String {
    "https://app.ayrshare.com/api".to_string()
}

impl Default for AyrshareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AyrshareConfig {
    /// Settings pointed at another API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Wire body of a post submission.
#[derive(Debug, Serialize)]
struct PostBody<'a> {
    post: &'a str,
    platforms: &'a [String],
    media_urls: [&'a str; 1],
}

impl<'a> From<&'a PublishRequest> for PostBody<'a> {
    fn from(request: &'a PublishRequest) -> Self {
        Self {
            post: request.post().as_str(),
            platforms: request.platforms(),
            media_urls: [request.image_url().as_str()],
        }
    }
}

/// Publishes posts through Ayrshare.
pub struct AyrshareClient {
    http: reqwest::Client,
    api_key: String,
    config: AyrshareConfig,
}

impl std::fmt::Debug for AyrshareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AyrshareClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AyrshareClient {
    /// Create a client authenticating with `api_key` as a bearer token.
    pub fn new(api_key: impl Into<String>, config: AyrshareConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            config,
        }
    }

    async fn publish_internal(
        &self,
        request: &PublishRequest,
    ) -> Result<serde_json::Value, PublishError> {
        let url = format!("{}/post", self.config.base_url());
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&PostBody::from(request))
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        let body = response
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::MalformedResponse(e.to_string())))?;

        info!(%status, "Publisher responded");
        Ok(body)
    }
}

#[async_trait]
impl Publisher for AyrshareClient {
    #[instrument(skip(self, request), fields(platforms = ?request.platforms()))]
    async fn publish(&self, request: &PublishRequest) -> TrendcastResult<serde_json::Value> {
        Ok(self.publish_internal(request).await?)
    }
}
