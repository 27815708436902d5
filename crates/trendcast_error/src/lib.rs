//! Error types for the Trendcast service.
//!
//! This crate provides the error types shared by every Trendcast crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Errors that can be retried implement [`RetryableError`], which separates
//! rate limiting from transient transport failures and permanent conditions
//! such as malformed responses.
//!
//! # Examples
//!
//! ```
//! use trendcast_error::{TrendcastResult, TrendsError, TrendsErrorKind};
//!
//! fn fetch_trends() -> TrendcastResult<Vec<String>> {
//!     Err(TrendsError::new(TrendsErrorKind::RateLimited))?
//! }
//!
//! match fetch_trends() {
//!     Ok(keywords) => println!("Got: {:?}", keywords),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod publish;
mod retry;
mod server;
mod trends;
mod unsplash;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{TrendcastError, TrendcastErrorKind, TrendcastResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use publish::{PublishError, PublishErrorKind};
pub use retry::RetryableError;
pub use server::{ServerError, ServerErrorKind};
pub use trends::{TrendsError, TrendsErrorKind};
pub use unsplash::{UnsplashError, UnsplashErrorKind};
