//! Generate and publish workflows.

use std::sync::Arc;
use tracing::{debug, info, instrument};
use trendcast_core::{GenerateOutcome, PostSuggestion, PublishRequest, Topic};
use trendcast_error::TrendcastResult;
use trendcast_interface::{ImageResolver, Publisher};
use trendcast_models::{ContentGenerator, GeminiClient};
use trendcast_social::{AyrshareClient, UnsplashClient};
use trendcast_trends::{GoogleTrendsClient, TrendsLookup};

use crate::{Credentials, TrendcastConfig};

/// Sequences the remote calls behind each HTTP endpoint.
///
/// Every step is awaited before the next starts. Shared state is immutable,
/// so one instance serves all requests.
#[derive(Clone)]
pub struct Orchestrator {
    generator: ContentGenerator,
    trends: TrendsLookup,
    images: Arc<dyn ImageResolver>,
    publisher: Arc<dyn Publisher>,
    use_trend_context: bool,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("generator", &self.generator)
            .field("trends", &self.trends)
            .field("use_trend_context", &self.use_trend_context)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    /// Assemble from already constructed collaborators.
    pub fn new(
        generator: ContentGenerator,
        trends: TrendsLookup,
        images: Arc<dyn ImageResolver>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            generator,
            trends,
            images,
            publisher,
            use_trend_context: false,
        }
    }

    /// Pass trend keywords to keyword refinement when enabled.
    pub fn with_trend_context(mut self, enabled: bool) -> Self {
        self.use_trend_context = enabled;
        self
    }

    /// Build the production clients from configuration and credentials.
    #[instrument(skip_all, fields(model = %config.gemini.model))]
    pub fn from_config(
        config: &TrendcastConfig,
        credentials: &Credentials,
    ) -> TrendcastResult<Self> {
        let model = GeminiClient::new(&credentials.gemini_api_key, &config.gemini.model)?;
        let trends_client = GoogleTrendsClient::new(config.trends.clone())?;
        let trends = TrendsLookup::new(Arc::new(trends_client), config.trends.retry_policy());
        let images = UnsplashClient::new(
            credentials.unsplash_access_key.clone(),
            config.unsplash.clone(),
        );
        let publisher = AyrshareClient::new(
            credentials.ayrshare_api_key.clone(),
            config.ayrshare.clone(),
        );

        debug!("Service clients constructed");
        Ok(Self::new(
            ContentGenerator::new(Arc::new(model)),
            trends,
            Arc::new(images),
            Arc::new(publisher),
        )
        .with_trend_context(config.generation.use_trend_context))
    }

    /// Topic to post suggestions, each paired with an image.
    ///
    /// Trends are looked up for the image keyword; the returned keywords are
    /// the model-refined ones.
    #[instrument(skip(self), fields(topic = %topic))]
    pub async fn generate(&self, topic: &Topic) -> TrendcastResult<GenerateOutcome> {
        let image_keyword = self.generator.extract_image_keyword(topic).await?;

        let trends = self
            .trends
            .fetch_trending_keywords(image_keyword.as_str())
            .await?;
        info!(ok = *trends.ok(), count = trends.keywords().len(), "Fetched trends");

        let keywords = if self.use_trend_context {
            self.generator
                .refine_keywords_with_context(topic, trends.keywords())
                .await?
        } else {
            self.generator.refine_keywords(topic).await?
        };
        let posts = self.generator.generate_posts(topic, &keywords).await?;
        info!(posts = posts.len(), keywords = keywords.len(), "Generated posts");

        let mut suggestions = Vec::with_capacity(posts.len());
        for post in posts {
            let image_url = self.images.resolve_image(image_keyword.as_str()).await;
            suggestions.push(PostSuggestion::new(post, image_url));
        }

        Ok(GenerateOutcome::new(suggestions, *trends.ok(), keywords))
    }

    /// Forward a publish request and hand back the provider's answer.
    #[instrument(skip(self, request), fields(platforms = ?request.platforms()))]
    pub async fn publish(&self, request: &PublishRequest) -> TrendcastResult<serde_json::Value> {
        let response = self.publisher.publish(request).await?;
        info!("Publish request forwarded");
        Ok(response)
    }
}
