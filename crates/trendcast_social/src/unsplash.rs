//! Unsplash random-photo lookup.

use async_trait::async_trait;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use trendcast_error::{UnsplashError, UnsplashErrorKind};
use trendcast_interface::ImageResolver;

/// Placeholder photo used whenever search cannot produce a URL.
pub const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1542281286-9e0a16bb7366?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

/// Unsplash endpoint and fallback settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct UnsplashConfig {
    /// API root, without a trailing slash
    #[serde(default = "default_base_url")]
    base_url: String,
    /// URL returned when search fails
    #[serde(default = "default_fallback_url")]
    fallback_url: String,
}

fn default_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_fallback_url() -> String {
    FALLBACK_IMAGE_URL.to_string()
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fallback_url: default_fallback_url(),
        }
    }
}

impl UnsplashConfig {
    /// Default fallback with another API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct RandomPhoto {
    urls: Option<PhotoUrls>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: Option<String>,
}

/// Client for the Unsplash random-photo endpoint.
pub struct UnsplashClient {
    http: reqwest::Client,
    access_key: String,
    config: UnsplashConfig,
}

impl std::fmt::Debug for UnsplashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl UnsplashClient {
    /// Create a client using `access_key` as the `client_id`.
    pub fn new(access_key: impl Into<String>, config: UnsplashConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_key: access_key.into(),
            config,
        }
    }

    /// One random photo for `query`, as the `urls.regular` link.
    #[instrument(skip(self))]
    pub async fn random_photo_url(&self, query: &str) -> Result<String, UnsplashError> {
        let url = format!("{}/photos/random", self.config.base_url());
        let response = self
            .http
            .get(&url)
            .query(&[("query", query), ("client_id", self.access_key.as_str())])
            .send()
            .await
            .map_err(|e| UnsplashError::new(UnsplashErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UnsplashError::new(UnsplashErrorKind::Http(status.as_u16())));
        }

        let photo: RandomPhoto = response.json().await.map_err(|e| {
            UnsplashError::new(UnsplashErrorKind::MalformedResponse(e.to_string()))
        })?;

        photo
            .urls
            .and_then(|urls| urls.regular)
            .ok_or_else(|| {
                UnsplashError::new(UnsplashErrorKind::MalformedResponse(
                    "missing urls.regular".to_string(),
                ))
            })
    }
}

#[async_trait]
impl ImageResolver for UnsplashClient {
    async fn resolve_image(&self, query: &str) -> String {
        match self.random_photo_url(query).await {
            Ok(url) => {
                debug!(%url, "Resolved image");
                url
            }
            Err(e) => {
                warn!(error = %e, "Image search failed, using fallback image");
                self.config.fallback_url().clone()
            }
        }
    }
}
