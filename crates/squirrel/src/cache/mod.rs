//! Thread-safe in-memory cache with lazy resolution and freshness merges
//!
//! The cache maps keys to [`Stash`](crate::Stash) values behind a single
//! reader/writer lock. Beyond a plain map it offers two behaviors:
//!
//! - **Lazy resolution**: [`Cache::get`] falls back to a configured
//!   [`Resolver`](crate::Resolver) on a miss and stores what it returns.
//! - **Freshness merge**: [`Cache::update_if_newer`] keeps whichever stash was
//!   created last.
//!
//! There is no eviction, size bound or expiry; entries live until deleted.
//!
//! # Examples
//!
//! ## Unconditional writes
//! ```
//! use squirrel::{Cache, Stash};
//!
//! let cache: Cache<&str, u32> = Cache::new();
//! cache.upsert_value("a", 1);
//! cache.upsert_stash("b", Stash::new(2));
//! cache.delete(&"a");
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"b"), Some(2));
//! ```
//!
//! ## Freshness merge
//! ```
//! use std::time::Duration;
//!
//! use squirrel::{Cache, CacheConfig, MockClock, Stash};
//!
//! let clock = MockClock::new();
//! let cache: Cache<&str, &str, MockClock> =
//!     Cache::with_clock(CacheConfig::named("prices"), clock.clone());
//!
//! let stale = Stash::with_clock("v1", &clock);
//! clock.advance(Duration::from_secs(1));
//! let fresh = Stash::with_clock("v2", &clock);
//!
//! assert!(cache.update_if_newer("sku-1", fresh));
//! assert!(!cache.update_if_newer("sku-1", stale));
//! assert_eq!(cache.get(&"sku-1"), Some("v2"));
//! ```
//!
//! # Thread Safety
//!
//! The cache can be shared across threads with `Arc` or by cloning the
//! handle:
//!
//! ```
//! use std::thread;
//!
//! use squirrel::Cache;
//!
//! let cache: Cache<String, usize> = Cache::new();
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let cache = cache.clone();
//!         thread::spawn(move || cache.upsert_value(format!("key-{i}"), i))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 4);
//! ```

mod config;
mod core;

// Re-export public API
pub use self::core::Cache;

pub use config::{CacheConfig, CacheConfigBuilder};
