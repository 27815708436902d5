//! Generative model integration for Trendcast.
//!
//! [`ContentGenerator`] turns a topic into an image search phrase, a refined
//! keyword list and a handful of post drafts. It talks to any
//! [`TextModel`](trendcast_interface::TextModel); the Gemini implementation
//! lives behind the `gemini` feature.
//!
//! ```toml
//! [dependencies]
//! trendcast_models = { version = "0.1", features = ["gemini"] }
//! ```
//!
//! ```no_run
//! use std::sync::Arc;
//! use trendcast_core::Topic;
//! use trendcast_error::TrendcastResult;
//! use trendcast_interface::TextModel;
//! use trendcast_models::ContentGenerator;
//!
//! async fn draft(model: Arc<dyn TextModel>) -> TrendcastResult<Vec<String>> {
//!     let generator = ContentGenerator::new(model);
//!     let (posts, _keywords) = generator
//!         .generate_post_content(&Topic::from("Hyderabad"))
//!         .await?;
//!     Ok(posts)
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod prompts;

pub use generator::{ContentGenerator, POST_DELIMITER, split_posts};

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{DEFAULT_MODEL, GeminiClient};
