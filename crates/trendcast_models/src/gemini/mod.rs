//! Google Gemini API client implementation.
//!
//! [`GeminiClient`] answers single-shot text prompts against one fixed model.
//! The API key is injected at construction; nothing is read from the
//! environment here.

mod client;

pub use client::{DEFAULT_MODEL, GeminiClient};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, trendcast_error::GeminiError>;
