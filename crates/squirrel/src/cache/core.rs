//! Core cache implementation
//!
//! A single `RwLock` guards the entry map. Every public operation takes the
//! lock in the narrowest mode it needs and releases it before doing anything
//! else, so resolvers always run unlocked and may re-enter the cache.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use super::config::CacheConfig;
use crate::clock::{Clock, SystemClock};
use crate::resolver::Resolver;
use crate::stash::Stash;

type SharedResolver<K, V> = Arc<dyn Resolver<K, V>>;

/// Generic thread-safe cache with lazy resolution and freshness merges
///
/// # Type Parameters
/// - `K`: Key type (must be `Eq + Hash + Clone`)
/// - `V`: Value type (must be `Clone`)
/// - `C`: Clock used to stamp values stored by
///   [`upsert_value`](Self::upsert_value) (defaults to `SystemClock`)
///
/// Cloning a `Cache` is cheap and yields a handle to the same entries and
/// resolver slot.
///
/// # Example
/// ```
/// use squirrel::Cache;
///
/// let cache: Cache<String, i32> = Cache::new();
/// cache.upsert_value("key".to_string(), 42);
/// assert_eq!(cache.get(&"key".to_string()), Some(42));
/// ```
pub struct Cache<K, V, C = SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    entries: Arc<RwLock<HashMap<K, Stash<V>>>>,
    resolver: Arc<RwLock<Option<SharedResolver<K, V>>>>,
    config: CacheConfig,
    clock: C,
}

impl<K, V> Cache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty cache with no resolver
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create an empty cache with the given configuration
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create an empty cache that falls back to `resolver` on misses
    ///
    /// # Example
    /// ```
    /// use squirrel::Cache;
    ///
    /// let cache: Cache<u64, u64> = Cache::with_resolver(|n: &u64| Some(n * n));
    /// assert_eq!(cache.get(&12), Some(144));
    /// assert!(cache.contains_key(&12));
    /// ```
    pub fn with_resolver<R>(resolver: R) -> Self
    where
        R: Resolver<K, V> + 'static,
    {
        let cache = Self::new();
        cache.set_resolver(resolver);
        cache
    }
}

impl<K, V> Default for Cache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Cache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    /// Create a cache with a custom clock (useful for testing)
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::with_capacity(config.initial_capacity))),
            resolver: Arc::new(RwLock::new(None)),
            config,
            clock,
        }
    }

    /// Configuration this cache was built with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Install or replace the resolver used on misses
    pub fn set_resolver<R>(&self, resolver: R)
    where
        R: Resolver<K, V> + 'static,
    {
        *self.resolver.write() = Some(Arc::new(resolver));
    }

    /// Remove the resolver; later misses return `None`
    pub fn clear_resolver(&self) {
        *self.resolver.write() = None;
    }

    /// Whether a resolver is currently installed
    pub fn has_resolver(&self) -> bool {
        self.resolver.read().is_some()
    }

    /// Get a value, resolving and storing it on a miss
    ///
    /// A cached value is returned without touching the resolver. On a miss
    /// the resolver (if any) runs with no lock held; a `Some` result is
    /// stored as a freshly stamped stash and returned. Concurrent misses on
    /// the same key may each run the resolver, and the last store wins.
    pub fn get(&self, key: &K) -> Option<V> {
        // The read guard is gone once `peek` returns. Holding it here would
        // deadlock against the write lock taken by `upsert_value` below.
        if let Some(value) = self.peek(key) {
            trace!(cache = %self.config.name, "cache hit");
            return Some(value);
        }

        let Some(resolver) = self.current_resolver() else {
            trace!(cache = %self.config.name, "cache miss; no resolver configured");
            return None;
        };

        debug!(cache = %self.config.name, "cache miss; invoking resolver");
        match resolver.resolve(key) {
            Some(value) => {
                self.upsert_value(key.clone(), value.clone());
                Some(value)
            }
            None => {
                debug!(cache = %self.config.name, "resolver returned no value");
                None
            }
        }
    }

    /// Get a cached value without falling back to the resolver
    pub fn peek(&self, key: &K) -> Option<V> {
        let entries = self.entries.read();
        entries.get(key).map(|stash| stash.value().clone())
    }

    /// Get the stored stash, including its creation time
    ///
    /// Never invokes the resolver.
    pub fn get_stash(&self, key: &K) -> Option<Stash<V>> {
        let entries = self.entries.read();
        entries.get(key).cloned()
    }

    /// Store `value` stamped with the cache clock, replacing any entry
    pub fn upsert_value(&self, key: K, value: V) {
        let stash = Stash::with_clock(value, &self.clock);
        self.upsert_stash(key, stash);
    }

    /// Store `stash` as-is, replacing any entry regardless of age
    pub fn upsert_stash(&self, key: K, stash: Stash<V>) {
        let mut entries = self.entries.write();
        entries.insert(key, stash);
        trace!(cache = %self.config.name, size = entries.len(), "stored entry");
    }

    /// Store `stash` only if it is newer than the current entry
    ///
    /// An absent key always takes `stash`. An existing entry is replaced only
    /// when `stash` was created strictly later; ties keep the existing entry.
    /// The age check and the write are separate lock acquisitions, so a
    /// concurrent writer can land in between; the entry is never corrupted,
    /// but an older candidate may win that race.
    ///
    /// Returns `true` when `stash` was written.
    pub fn update_if_newer(&self, key: K, stash: Stash<V>) -> bool {
        let current = {
            let entries = self.entries.read();
            entries.get(&key).map(Stash::created_at)
        };

        match current {
            None => {
                self.upsert_stash(key, stash);
                true
            }
            Some(existing) if stash.created_at() > existing => {
                debug!(
                    cache = %self.config.name,
                    existing = %existing,
                    candidate = %stash.created_at(),
                    "replacing entry with newer stash"
                );
                self.upsert_stash(key, stash);
                true
            }
            Some(existing) => {
                debug!(
                    cache = %self.config.name,
                    existing = %existing,
                    candidate = %stash.created_at(),
                    "keeping existing entry; candidate is not newer"
                );
                false
            }
        }
    }

    /// Remove the entry for `key`, if any
    pub fn delete(&self, key: &K) {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            trace!(cache = %self.config.name, size = entries.len(), "deleted entry");
        }
    }

    /// Whether `key` currently has an entry
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Remove all entries; the resolver is kept
    pub fn clear(&self) {
        self.entries.write().clear();
        debug!(cache = %self.config.name, "cleared all entries");
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn current_resolver(&self) -> Option<SharedResolver<K, V>> {
        self.resolver.read().clone()
    }
}

impl<K, V, C> Clone for Cache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock + Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            resolver: Arc::clone(&self.resolver),
            config: self.config.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<K, V, C> fmt::Debug for Cache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("name", &self.config.name)
            .field("len", &self.len())
            .field("has_resolver", &self.has_resolver())
            .finish_non_exhaustive()
    }
}
