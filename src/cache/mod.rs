//! Cache Module
//!
//! Provides in-memory caching of raw API payloads with passive TTL expiry.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{monotonic_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ExpiringCache;
