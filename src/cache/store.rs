//! Expiring Cache Module
//!
//! Key to raw-payload store whose entries are evicted once older than a
//! fixed time-to-live. Eviction is passive: every `add` runs a reap pass,
//! there is no background timer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};
use crate::error::{PokedexError, Result};

// == Inner State ==
/// Everything the lock guards.
#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Expiring Cache ==
/// Time-bounded memoization of opaque byte payloads.
///
/// `add`, `get` and `reap` all run under one exclusive lock, so the cache
/// can be shared across threads behind an `Arc`. Lookups do not check age:
/// a stale entry stays visible until the next `add` reaps it.
#[derive(Debug)]
pub struct ExpiringCache {
    inner: Mutex<CacheInner>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates a cache on the system clock.
    ///
    /// # Errors
    /// `InvalidArgument` if `ttl` is zero.
    pub fn new(ttl: Duration) -> Result<Self> {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self> {
        if ttl.is_zero() {
            return Err(PokedexError::InvalidArgument(
                "cache ttl must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            inner: Mutex::new(CacheInner::default()),
            ttl,
            clock,
        })
    }

    // == Add ==
    /// Inserts or overwrites `key`, stamping it with the current time, then
    /// reaps expired entries. Overwriting resets the entry's age.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let mut inner = self.lock();
        // Read under the lock so the stamp and the reap see the same instant
        let now = self.clock.now_ms();

        debug!(key = %key, "cache add");
        inner.entries.insert(key, CacheEntry::new(value.into(), now));
        inner.stats.record_add();

        Self::reap_locked(&mut inner, now, self.ttl);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, whatever its age.
    ///
    /// A miss is `None`. The entry map is never modified by a lookup.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut inner = self.lock();

        let found = inner.entries.get(key).map(|entry| entry.value.clone());
        match found {
            Some(value) => {
                debug!(key = %key, "cache hit");
                inner.stats.record_hit();
                Some(value)
            }
            None => {
                debug!(key = %key, "cache miss");
                inner.stats.record_miss();
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry older than the ttl.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&self) -> usize {
        let mut inner = self.lock();
        let now = self.clock.now_ms();
        Self::reap_locked(&mut inner, now, self.ttl)
    }

    fn reap_locked(inner: &mut CacheInner, now: u64, ttl: Duration) -> usize {
        let expired_keys: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            inner.entries.remove(&key);
            debug!(key = %key, "reaped expired entry");
        }

        if count > 0 {
            info!("cache reap: removed {} expired entries", count);
        }

        inner.stats.record_reaped(count);
        let total = inner.entries.len();
        inner.stats.set_total_entries(total);
        count
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries physically held, stale ones included.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    // A panic while holding the lock cannot leave the map half-written:
    // every mutation is a single insert or remove.
    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use std::thread;

    fn cache_with_clock(ttl_secs: u64) -> (ExpiringCache, ManualClock) {
        let clock = ManualClock::new(0);
        let cache =
            ExpiringCache::with_clock(Duration::from_secs(ttl_secs), Arc::new(clock.clone()))
                .unwrap();
        (cache, clock)
    }

    #[test]
    fn test_cache_new() {
        let cache = ExpiringCache::new(Duration::from_secs(5)).unwrap();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.ttl(), Duration::from_secs(5));
    }

    #[test]
    fn test_cache_zero_ttl_rejected() {
        let result = ExpiringCache::new(Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidArgument(_))));
    }

    #[test]
    fn test_cache_add_and_get() {
        let (cache, _clock) = cache_with_clock(10);

        cache.add("key1", vec![1, 2, 3]);

        assert_eq!(cache.get("key1"), Some(vec![1, 2, 3]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_nonexistent() {
        let (cache, _clock) = cache_with_clock(10);

        assert_eq!(cache.get("nonexistent"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_overwrite() {
        let (cache, _clock) = cache_with_clock(10);

        cache.add("key1", b"value1".to_vec());
        cache.add("key1", b"value2".to_vec());

        assert_eq!(cache.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_overwrite_resets_age() {
        let (cache, clock) = cache_with_clock(10);

        cache.add("k", b"v1".to_vec());
        clock.advance_ms(6_000);
        cache.add("k", b"v2".to_vec());

        // 15s after the first write, 9s after the second
        clock.advance_ms(9_000);
        cache.add("other", Vec::new());

        assert_eq!(cache.get("k"), Some(b"v2".to_vec()));
    }

    #[test]
    fn test_cache_get_returns_stale_until_reap() {
        let (cache, clock) = cache_with_clock(10);

        cache.add("a", vec![1]);
        clock.advance_ms(60_000);

        // No add since expiry, so the entry is still served
        assert_eq!(cache.get("a"), Some(vec![1]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_add_reaps_expired() {
        let (cache, clock) = cache_with_clock(10);

        cache.add("a", vec![1, 2, 3]);
        clock.set_ms(5_000);
        assert_eq!(cache.get("a"), Some(vec![1, 2, 3]));

        clock.set_ms(11_000);
        cache.add("b", vec![9]);

        clock.set_ms(12_000);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(vec![9]));
    }

    #[test]
    fn test_cache_reap_keeps_live_entries() {
        let (cache, clock) = cache_with_clock(10);

        cache.add("old", vec![1]);
        clock.advance_ms(8_000);
        cache.add("young", vec![2]);
        clock.advance_ms(3_000);

        let removed = cache.reap();
        assert_eq!(removed, 1);
        assert_eq!(cache.get("old"), None);
        assert_eq!(cache.get("young"), Some(vec![2]));
    }

    #[test]
    fn test_cache_reap_boundary_is_strict() {
        let (cache, clock) = cache_with_clock(10);

        cache.add("a", vec![1]);
        clock.advance_ms(10_000);

        assert_eq!(cache.reap(), 0);
        clock.advance_ms(1);
        assert_eq!(cache.reap(), 1);
    }

    #[test]
    fn test_cache_add_reads_clock_after_lock_wait() {
        let (cache, clock) = cache_with_clock(10);
        cache.add("a", vec![1]);

        thread::scope(|s| {
            let guard = cache.inner.lock().unwrap();
            let writer = s.spawn(|| cache.add("b", vec![2]));

            // The writer is now blocked on the lock while time moves on
            thread::sleep(Duration::from_millis(50));
            clock.advance_ms(11_000);
            drop(guard);

            writer.join().unwrap();
        });

        assert_eq!(cache.get("a"), None, "Reap must use the post-wait time");
        assert_eq!(cache.lock().entries["b"].created_at, 11_000);
    }

    #[test]
    fn test_cache_system_clock_keeps_fresh_entries() {
        let cache = ExpiringCache::new(Duration::from_secs(10)).unwrap();

        cache.add("a", vec![1]);
        thread::sleep(Duration::from_millis(20));
        cache.add("b", vec![2]);

        assert_eq!(cache.get("a"), Some(vec![1]));
    }

    #[test]
    fn test_cache_stats() {
        let (cache, clock) = cache_with_clock(10);

        cache.add("key1", vec![1]);
        cache.get("key1"); // hit
        cache.get("nonexistent"); // miss
        clock.advance_ms(20_000);
        cache.add("key2", vec![2]); // reaps key1

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.adds, 2);
        assert_eq!(stats.reaped, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
