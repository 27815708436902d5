//! Image search and publishing integrations for Trendcast.
//!
//! - [`UnsplashClient`] implements
//!   [`ImageResolver`](trendcast_interface::ImageResolver) and never fails:
//!   any search problem yields the configured fallback image.
//! - [`AyrshareClient`] implements [`Publisher`](trendcast_interface::Publisher)
//!   and hands back the provider's response body untouched.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ayrshare;
mod unsplash;

pub use ayrshare::{AyrshareClient, AyrshareConfig};
pub use unsplash::{FALLBACK_IMAGE_URL, UnsplashClient, UnsplashConfig};
