//! A thread-safe, LRU-evicting memoization cache.
//!
//! Generalizes a by-key compute-once-and-remember pattern: the
//! [`crate::engine::season_resolver::SeasonResolver`] uses it to memoize
//! `(season_name, year) -> date` lookups so repeated schedule-filtering
//! passes over the same generation window don't re-query the store for
//! the same season twice.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

/// Thread-safe memoization cache with LRU eviction.
pub struct MemoCache<K: Eq + Hash, V: Clone> {
    data: Mutex<LruCache<K, V>>,
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    /// Create a new cache with the given maximum number of entries.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            data: Mutex::new(LruCache::new(
                NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::new(1).unwrap()),
            )),
        }
    }

    /// Return the cached value for `key`, or run `compute` once, cache its
    /// result, and return it. `compute`'s error is not cached.
    pub fn get_or_try_compute<E>(
        &self,
        key: K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        {
            let mut cache = self.data.lock().unwrap();
            if let Some(value) = cache.get(&key) {
                return Ok(value.clone());
            }
        }

        let value = compute()?;
        let mut cache = self.data.lock().unwrap();
        cache.put(key, value.clone());
        Ok(value)
    }

    /// Current number of cached entries.
    pub fn len(&self) -> usize {
        self.data.lock().unwrap().len()
    }

    /// Whether the cache currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.lock().unwrap().is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::with_capacity(256)
    }
}
