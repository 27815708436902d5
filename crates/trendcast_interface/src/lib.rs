//! Trait definitions for the external services Trendcast orchestrates.
//!
//! Each remote dependency sits behind one trait so the workflows can be
//! exercised against in-process doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageResolver, Publisher, TextModel, TrendsSource};
