//! Fallback lookup capability for cache misses
//!
//! A [`Resolver`] computes the value for a key that is not cached. Any
//! `Fn(&K) -> Option<V> + Send + Sync` closure is a resolver. Lookups that can
//! fail are wrapped with [`fallible`], which reports failures as misses.

use std::fmt;

use tracing::warn;

/// Computes a value for a key that is not in the cache
///
/// Returning `None` means the key cannot be resolved; nothing is stored.
/// The cache calls resolvers without holding its lock, so a resolver may
/// call back into the same cache.
pub trait Resolver<K, V>: Send + Sync {
    /// Look up the value for `key`
    fn resolve(&self, key: &K) -> Option<V>;
}

impl<K, V, F> Resolver<K, V> for F
where
    F: Fn(&K) -> Option<V> + Send + Sync,
{
    fn resolve(&self, key: &K) -> Option<V> {
        self(key)
    }
}

/// Resolver adapter that maps errors to misses
///
/// Created by [`fallible`].
#[derive(Clone)]
pub struct Fallible<F> {
    lookup: F,
}

impl<F> fmt::Debug for Fallible<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallible").finish_non_exhaustive()
    }
}

/// Adapt a lookup returning `Result<Option<V>, E>` into a [`Resolver`]
///
/// Errors are logged at `warn` and treated as "not found"; they never reach
/// the caller of [`Cache::get`](crate::Cache::get).
///
/// # Example
/// ```
/// use squirrel::resolver::fallible;
/// use squirrel::{Cache, ResolveError};
///
/// let cache: Cache<u32, String> = Cache::with_resolver(fallible(|id: &u32| {
///     if *id == 0 {
///         Err(ResolveError::unavailable("users", "id 0 is reserved"))
///     } else {
///         Ok(Some(format!("user-{id}")))
///     }
/// }));
///
/// assert_eq!(cache.get(&7), Some("user-7".to_string()));
/// assert_eq!(cache.get(&0), None);
/// ```
pub fn fallible<F>(lookup: F) -> Fallible<F> {
    Fallible { lookup }
}

impl<K, V, E, F> Resolver<K, V> for Fallible<F>
where
    F: Fn(&K) -> Result<Option<V>, E> + Send + Sync,
    E: fmt::Display,
{
    fn resolve(&self, key: &K) -> Option<V> {
        match (self.lookup)(key) {
            Ok(value) => value,
            Err(error) => {
                warn!(error = %error, "resolver failed; treating as miss");
                None
            }
        }
    }
}
