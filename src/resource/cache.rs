//! Time-bound resource cache keyed by case-folded name.
//!
//! `get` is read-shaped but not side-effect free: on a miss or an expired
//! entry it calls the factory, which starts a new operation.
//!
//! There is no sweeper. Expired entries are replaced lazily on the next
//! `get` for their key, and keys that are never requested again stay in the
//! map until [`ResourceCache::prune_expired`] or [`ResourceCache::clear`] is
//! called explicitly.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use super::Resource;

/// Builds a fresh resource for a normalized key.
pub type ResourceFactory<T, E> = Box<dyn Fn(&str) -> Resource<T, E> + Send + Sync>;

/// Shared handle passed down to whoever needs the cache.
pub type CacheHandle<T, E> = Arc<ResourceCache<T, E>>;

/// One cached resource.
pub struct CacheEntry<T, E> {
    key: String,
    resource: Resource<T, E>,
    /// `None` when `now + ttl` is not representable; such entries never expire.
    expires_at: Option<Instant>,
}

impl<T, E> CacheEntry<T, E> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn resource(&self) -> &Resource<T, E> {
        &self.resource
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// An entry expires at `expires_at`, inclusive.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

impl<T, E> Clone for CacheEntry<T, E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            resource: self.resource.clone(),
            expires_at: self.expires_at,
        }
    }
}

impl<T, E> fmt::Debug for CacheEntry<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("resource", &self.resource)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Deduplicates and time-bounds resource creation per key.
pub struct ResourceCache<T, E> {
    ttl: Duration,
    factory: ResourceFactory<T, E>,
    entries: Mutex<HashMap<String, CacheEntry<T, E>>>,
}

impl<T, E> ResourceCache<T, E> {
    /// Create a cache whose entries live for `ttl` and are produced by
    /// `factory`.
    pub fn new<F>(ttl: Duration, factory: F) -> Self
    where
        F: Fn(&str) -> Resource<T, E> + Send + Sync + 'static,
    {
        Self {
            ttl,
            factory: Box::new(factory),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Same as [`ResourceCache::new`], wrapped in a shareable handle.
    pub fn shared<F>(ttl: Duration, factory: F) -> CacheHandle<T, E>
    where
        F: Fn(&str) -> Resource<T, E> + Send + Sync + 'static,
    {
        Arc::new(Self::new(ttl, factory))
    }

    /// Case-fold a lookup key.
    pub fn normalize_key(key: &str) -> String {
        key.to_lowercase()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the live resource for `key`, creating one if there is none or
    /// the existing entry has expired.
    ///
    /// The factory is called without holding the map lock. Two threads that
    /// both see a miss for the same key at the same time each build a
    /// resource and the last insert wins.
    pub fn get(&self, key: &str) -> Resource<T, E> {
        let key = Self::normalize_key(key);
        let now = Instant::now();

        {
            let entries = self.entries.lock();
            match entries.get(&key) {
                Some(entry) if !entry.is_expired(now) => {
                    tracing::debug!(key = %key, resource_id = %entry.resource.id(), "Resource cache hit");
                    return entry.resource.clone();
                }
                Some(entry) => {
                    tracing::debug!(
                        key = %key,
                        stale_resource_id = %entry.resource.id(),
                        "Resource cache entry expired, replacing"
                    );
                }
                None => {
                    tracing::debug!(key = %key, "Resource cache miss");
                }
            }
        }

        let resource = (self.factory)(&key);
        let entry = CacheEntry {
            key: key.clone(),
            resource: resource.clone(),
            expires_at: now.checked_add(self.ttl),
        };
        self.entries.lock().insert(key, entry);
        resource
    }

    /// The live resource for `key` without creating one.
    pub fn peek(&self, key: &str) -> Option<Resource<T, E>> {
        self.entry(key).map(|entry| entry.resource)
    }

    /// The live entry for `key`, if any.
    pub fn entry(&self, key: &str) -> Option<CacheEntry<T, E>> {
        let key = Self::normalize_key(key);
        let now = Instant::now();
        self.entries
            .lock()
            .get(&key)
            .filter(|entry| !entry.is_expired(now))
            .cloned()
    }

    /// Drop the entry for `key` so the next `get` builds a new resource.
    ///
    /// Returns whether an entry was removed. An in-flight operation keeps
    /// running; its result is only seen by handles already given out.
    pub fn invalidate(&self, key: &str) -> bool {
        let key = Self::normalize_key(key);
        let removed = self.entries.lock().remove(&key).is_some();
        if removed {
            tracing::debug!(key = %key, "Resource cache entry invalidated");
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let count = entries.len();
        entries.clear();
        tracing::debug!(count, "Resource cache cleared");
    }

    /// Drop every expired entry and return how many were removed.
    pub fn prune_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, "Pruned expired resource cache entries");
        }
        removed
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<T, E> fmt::Debug for ResourceCache<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}
