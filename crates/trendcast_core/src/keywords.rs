//! Keyword collections produced during generation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Ordered keywords produced by the model for a topic.
///
/// Order is preserved as returned; duplicates and count are left alone.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Deref,
)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Parse a comma-separated model answer.
    ///
    /// # Examples
    ///
    /// ```
    /// use trendcast_core::KeywordSet;
    ///
    /// let keywords = KeywordSet::from_comma_separated("a, b ,c");
    /// assert_eq!(keywords.as_slice(), ["a", "b", "c"]);
    /// ```
    pub fn from_comma_separated(raw: &str) -> Self {
        Self(raw.split(',').map(|kw| kw.trim().to_string()).collect())
    }

    /// Borrow the keywords in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Keywords joined for embedding in a prompt.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(keywords: Vec<String>) -> Self {
        Self(keywords)
    }
}

/// Outcome of a trends lookup.
///
/// `ok == false` means the service kept rate limiting us and the lookup
/// gave up; `keywords` is empty in that case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct TrendKeywords {
    /// Top related queries, in service order
    keywords: Vec<String>,
    /// Whether the lookup completed
    ok: bool,
}

impl TrendKeywords {
    /// A completed lookup.
    pub fn found(keywords: Vec<String>) -> Self {
        Self { keywords, ok: true }
    }

    /// A lookup abandoned after repeated rate limiting.
    pub fn unavailable() -> Self {
        Self {
            keywords: Vec::new(),
            ok: false,
        }
    }
}
