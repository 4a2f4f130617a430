//! Fixed-window rate limiting
//!
//! Each identifier gets a counter that resets once its window ends. The
//! check-and-increment step is atomic, so concurrent requests for the same
//! key never admit more than the policy allows.

mod limiter;
mod store;
mod types;
mod utils;


pub use limiter::RateLimiter;
pub use store::{InMemoryStore, RateLimitStore};
pub use types::{RateLimitEntry, RateLimitPolicy, RateLimitResult, RateLimitScope};
