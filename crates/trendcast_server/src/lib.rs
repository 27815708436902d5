//! HTTP service for Trendcast.
//!
//! Turns a topic into a handful of social media post drafts, each paired
//! with a stock photo, and forwards a chosen draft to a publishing provider.
//!
//! # Routes
//!
//! - `GET /` landing page
//! - `GET /health` liveness probe
//! - `POST /generate` `{"topic": "..."}` to suggestions, keywords and trend status
//! - `POST /post` `{"post", "platforms", "image_url"}` to the provider's raw response
//!
//! # Example
//!
//! ```rust,no_run
//! use trendcast_server::{ApiState, Credentials, Orchestrator, TrendcastConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TrendcastConfig::load(None)?;
//!     let credentials = Credentials::from_env()?;
//!     let orchestrator = Orchestrator::from_config(&config, &credentials)?;
//!     serve(&config.server.address(), ApiState::new(orchestrator)).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod observability;
mod orchestrator;

pub use api::{ApiError, ApiState, GenerateRequest, create_router, serve};
pub use config::{Credentials, GeminiSettings, GenerationSettings, ServerSettings, TrendcastConfig};
pub use observability::{DEFAULT_LOG_FILTER, ObservabilityConfig, init_observability};
pub use orchestrator::Orchestrator;
