//! Time-based cache with TTL (Time To Live) support.
//!
//! Used to hold the built park search index between requests so the dataset
//! is not re-read and re-embedded on every query.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A cache entry with its expiration deadline.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// A thread-safe cache whose entries expire after a fixed TTL.
///
/// Cloning is cheap and clones share the same underlying map. Large values
/// should be stored behind `Arc` so `get` does not deep-copy them:
///
/// ```ignore
/// let cache = TimedCache::<String, Arc<ParkIndex>>::new(300);
/// cache.insert("default".to_string(), Arc::new(index));
/// ```
#[derive(Clone)]
pub struct TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    entries: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    ttl: Duration,
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache with the given TTL in seconds.
    pub fn new(ttl_seconds: u64) -> Self {
        Self::from_ttl(Duration::from_secs(ttl_seconds))
    }

    /// Create a cache with an arbitrary TTL duration.
    pub fn from_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Insert a value, replacing any existing entry for the key.
    ///
    /// The entry's deadline is set from the cache TTL at insert time.
    pub fn insert(&self, key: K, value: V) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };

        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, entry);
        }
    }

    /// Get a value if the key exists and its entry is still fresh.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();

        if let Ok(entries) = self.entries.read() {
            if let Some(entry) = entries.get(key) {
                if entry.is_fresh(now) {
                    return Some(entry.value.clone());
                }
            }
        }

        None
    }

    /// Remove a specific key.
    pub fn remove(&self, key: &K) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }

    /// Drop every entry.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Number of stored entries, expired ones included.
    ///
    /// Expired entries are only dropped when replaced, removed, or cleared;
    /// `get` simply ignores them.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The TTL applied to inserted entries.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<K, V> std::fmt::Debug for TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}
