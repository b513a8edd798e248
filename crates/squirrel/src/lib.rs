//! Generic, thread-safe, in-memory key-value cache.
//!
//! - [`Cache`]: the store, guarded by a single reader/writer lock
//! - [`Stash`]: an immutable value paired with its creation time
//! - [`Resolver`]: fallback lookup used when a key is missing
//! - [`Clock`]: time source used to stamp new stashes
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Stash`]

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod cache;
pub mod clock;
pub mod error;
pub mod resolver;
pub mod stash;

// Re-export commonly used types and traits for convenience
pub use cache::{Cache, CacheConfig, CacheConfigBuilder};
pub use clock::{Clock, MockClock, SystemClock};
pub use error::{ResolveError, ResolveResult};
pub use resolver::{fallible, Fallible, Resolver};
pub use stash::Stash;
