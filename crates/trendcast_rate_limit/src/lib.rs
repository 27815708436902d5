//! Backoff on rate limiting.
//!
//! [`RetryPolicy`] retries an operation while it keeps failing with a
//! rate-limit error, sleeping a doubling delay after each refusal. Any other
//! error ends the loop immediately. Running out of attempts is not an error:
//! the caller receives `Ok(None)` and decides how to degrade.
//!
//! ```
//! use std::time::Duration;
//! use trendcast_rate_limit::RetryPolicy;
//!
//! let policy = RetryPolicy::default();
//! let delays: Vec<_> = policy.delays().collect();
//! assert_eq!(
//!     delays,
//!     [Duration::from_secs(1), Duration::from_secs(2), Duration::from_secs(4)]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod policy;

pub use policy::RetryPolicy;
