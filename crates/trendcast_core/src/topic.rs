//! Free-text inputs to the generation workflow.

use serde::{Deserialize, Serialize};

/// A caller-supplied topic.
///
/// # Examples
///
/// ```
/// use trendcast_core::Topic;
///
/// let topic = Topic::from("new google data center in vizag");
/// assert_eq!(topic.as_str(), "new google data center in vizag");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Deref,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct Topic(String);

impl From<String> for Topic {
    fn from(topic: String) -> Self {
        Self(topic)
    }
}

impl From<&str> for Topic {
    fn from(topic: &str) -> Self {
        Self(topic.to_string())
    }
}

impl Topic {
    /// Borrow the topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Search phrase distilled from a topic.
///
/// Used as the query for both the trends lookup and the image search. Built
/// from trimmed model output and not validated beyond that.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Deref,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct ImageKeyword(String);

impl ImageKeyword {
    /// Build a keyword from raw model output, trimming surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use trendcast_core::ImageKeyword;
    ///
    /// let keyword = ImageKeyword::from_model_output("  google data center\n");
    /// assert_eq!(keyword.as_str(), "google data center");
    /// ```
    pub fn from_model_output(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Borrow the keyword text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
