//! Core data types for the Trendcast social content service.
//!
//! Every value here is request-scoped: constructed while handling one
//! generate or publish call, read, and dropped when the response is sent.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod keywords;
mod outcome;
mod publish;
mod topic;

pub use keywords::{KeywordSet, TrendKeywords};
pub use outcome::{GenerateOutcome, PostSuggestion};
pub use publish::{PublishRequest, PublishRequestBuilder};
pub use topic::{ImageKeyword, Topic};
