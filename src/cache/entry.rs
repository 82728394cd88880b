//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

// == Cache Entry ==
/// A stored payload and the moment it was written.
///
/// Entries are never modified in place; an overwrite replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Raw serialized payload, never interpreted by the cache
    pub value: Vec<u8>,
    /// Creation tick of the owning cache's clock (milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `now_ms`.
    pub fn new(value: Vec<u8>, now_ms: u64) -> Self {
        Self {
            value,
            created_at: now_ms,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since creation. A clock that moved backwards reads as zero.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: the comparison is strict, so an entry whose age
    /// equals the ttl exactly is still live.
    pub fn is_expired(&self, now_ms: u64, ttl: Duration) -> bool {
        u128::from(self.age_ms(now_ms)) > ttl.as_millis()
    }
}
