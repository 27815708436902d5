//! Generation results returned to the caller.

use crate::KeywordSet;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One ready-to-post suggestion.
///
/// # Examples
///
/// ```
/// use trendcast_core::PostSuggestion;
///
/// let suggestion = PostSuggestion::new("Charminar at dusk.", "https://img/1.jpg");
/// let json = serde_json::to_value(&suggestion).unwrap();
/// assert_eq!(json["image_url"], "https://img/1.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct PostSuggestion {
    /// Post text, intended to stay under 280 characters
    post: String,
    /// Image to attach
    image_url: String,
}

impl PostSuggestion {
    /// Pair a post with its image.
    pub fn new(post: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            post: post.into(),
            image_url: image_url.into(),
        }
    }
}

/// Everything the generate workflow hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateOutcome {
    /// One entry per generated post
    suggestions: Vec<PostSuggestion>,
    /// False when trends were skipped after rate limiting
    trends_ok: bool,
    /// Refined keywords used for generation
    keywords: KeywordSet,
}

impl GenerateOutcome {
    /// Assemble the response.
    pub fn new(suggestions: Vec<PostSuggestion>, trends_ok: bool, keywords: KeywordSet) -> Self {
        Self {
            suggestions,
            trends_ok,
            keywords,
        }
    }
}
