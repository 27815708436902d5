//! Topic to post drafts.

use std::sync::Arc;
use tracing::{debug, instrument};
use trendcast_core::{ImageKeyword, KeywordSet, Topic};
use trendcast_error::TrendcastResult;
use trendcast_interface::TextModel;

use crate::prompts;

/// Separator the model is asked to place between posts.
pub const POST_DELIMITER: &str = "---";

/// Split a model answer into posts on [`POST_DELIMITER`], trimming each.
///
/// The number of posts is whatever the split yields.
///
/// # Examples
///
/// ```
/// use trendcast_models::split_posts;
///
/// assert_eq!(split_posts("post1---post2---post3"), ["post1", "post2", "post3"]);
/// assert_eq!(split_posts(" only one "), ["only one"]);
/// ```
pub fn split_posts(raw: &str) -> Vec<String> {
    raw.split(POST_DELIMITER)
        .map(|post| post.trim().to_string())
        .collect()
}

/// Produces keywords and post drafts by prompting a text model.
///
/// Each method is one independent prompt/response exchange. Model errors
/// propagate unchanged; there is no retry or fallback here.
#[derive(Clone)]
pub struct ContentGenerator {
    model: Arc<dyn TextModel>,
}

impl std::fmt::Debug for ContentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentGenerator")
            .field("provider", &self.model.provider_name())
            .field("model", &self.model.model_name())
            .finish()
    }
}

impl ContentGenerator {
    /// Wrap a text model.
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Ask the model for the visual core of `topic`.
    #[instrument(skip(self), fields(model = %self.model.model_name()))]
    pub async fn extract_image_keyword(&self, topic: &Topic) -> TrendcastResult<ImageKeyword> {
        let raw = self
            .model
            .generate_text(&prompts::image_keyword_prompt(topic))
            .await?;
        let keyword = ImageKeyword::from_model_output(&raw);
        debug!(image_keyword = %keyword, "Extracted image keyword");
        Ok(keyword)
    }

    /// Ask the model for 5-10 engagement keywords for `topic`.
    pub async fn refine_keywords(&self, topic: &Topic) -> TrendcastResult<KeywordSet> {
        self.refine_keywords_with_context(topic, &[]).await
    }

    /// Like [`refine_keywords`](Self::refine_keywords), mentioning popular
    /// related searches in the prompt when `trend_context` is non-empty.
    #[instrument(
        skip(self, trend_context),
        fields(model = %self.model.model_name(), context = trend_context.len())
    )]
    pub async fn refine_keywords_with_context(
        &self,
        topic: &Topic,
        trend_context: &[String],
    ) -> TrendcastResult<KeywordSet> {
        let raw = self
            .model
            .generate_text(&prompts::keyword_prompt(topic, trend_context))
            .await?;
        let keywords = KeywordSet::from_comma_separated(&raw);
        debug!(count = keywords.len(), "Refined keywords");
        Ok(keywords)
    }

    /// Ask the model for three posts about `topic` using `keywords`.
    #[instrument(
        skip(self, keywords),
        fields(model = %self.model.model_name(), keywords = keywords.len())
    )]
    pub async fn generate_posts(
        &self,
        topic: &Topic,
        keywords: &KeywordSet,
    ) -> TrendcastResult<Vec<String>> {
        let raw = self
            .model
            .generate_text(&prompts::posts_prompt(topic, keywords))
            .await?;
        let posts = split_posts(&raw);
        debug!(count = posts.len(), "Generated posts");
        Ok(posts)
    }

    /// Refine keywords, then generate posts with them.
    pub async fn generate_post_content(
        &self,
        topic: &Topic,
    ) -> TrendcastResult<(Vec<String>, KeywordSet)> {
        let keywords = self.refine_keywords(topic).await?;
        let posts = self.generate_posts(topic, &keywords).await?;
        Ok((posts, keywords))
    }
}
