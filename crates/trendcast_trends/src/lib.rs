//! Google Trends integration for Trendcast.
//!
//! [`GoogleTrendsClient`] performs a single related-queries lookup.
//! [`TrendsLookup`] wraps any [`TrendsSource`](trendcast_interface::TrendsSource)
//! with the backoff schedule from [`TrendsConfig`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use trendcast_trends::{GoogleTrendsClient, TrendsConfig, TrendsLookup};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TrendsConfig::default();
//! let policy = config.retry_policy();
//! let lookup = TrendsLookup::new(Arc::new(GoogleTrendsClient::new(config)?), policy);
//! let trends = lookup.fetch_trending_keywords("hyderabad biryani").await?;
//! if *trends.ok() {
//!     println!("{:?}", trends.keywords());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod lookup;

pub use client::{GoogleTrendsClient, strip_xssi_prefix};
pub use config::TrendsConfig;
pub use lookup::TrendsLookup;
