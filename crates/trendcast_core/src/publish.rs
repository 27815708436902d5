//! Publish requests echoed back by the caller.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A chosen suggestion plus target platforms.
///
/// Nothing is looked up server side: the caller supplies every field.
///
/// # Examples
///
/// ```
/// use trendcast_core::PublishRequest;
///
/// let request = PublishRequest::builder()
///     .post("Biryani season is here")
///     .image_url("https://img/2.jpg")
///     .platforms(vec!["twitter".to_string(), "linkedin".to_string()])
///     .build()
///     .unwrap();
/// assert_eq!(request.platforms().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct PublishRequest {
    /// Post text
    post: String,
    /// Platform identifiers, passed through unmodified
    platforms: Vec<String>,
    /// The single media URL to attach
    image_url: String,
}

impl PublishRequest {
    /// Creates a new builder for `PublishRequest`.
    pub fn builder() -> PublishRequestBuilder {
        PublishRequestBuilder::default()
    }
}
