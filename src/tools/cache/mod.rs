//! Cache Tools
//!
//! Time-bounded, in-process memoization. Each namespace is its own typed
//! [`TtlCache`], so document bodies, listing responses and coupon resolutions
//! can never collide on a key.

mod clock;

pub use clock::*;

use crate::types::{CouponResolution, ListingKey, ListingResponse};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    created_at: DateTime<Utc>,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        match chrono::Duration::from_std(self.ttl) {
            Ok(ttl) => now < self.created_at + ttl,
            // TTL too large to represent: never expires.
            Err(_) => true,
        }
    }
}

/// Concurrent map whose entries expire a fixed time after they were written.
///
/// Expired entries are dropped lazily on `get`; [`TtlCache::purge_expired`]
/// evicts them eagerly.
pub struct TtlCache<K, V> {
    entries: DashMap<K, CacheEntry<V>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        match self.entries.get(key) {
            Some(entry) if entry.is_live(now) => return Some(entry.value.clone()),
            None => return None,
            Some(_) => {}
        }
        self.entries.remove_if(key, |_, e| !e.is_live(now));
        None
    }

    pub fn put(&self, key: K, value: V) {
        self.put_with_ttl(key, value, self.ttl);
    }

    pub fn put_with_ttl(&self, key: K, value: V, ttl: Duration) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                created_at: self.clock.now(),
                ttl,
            },
        );
    }

    pub fn purge_expired(&self) {
        let now = self.clock.now();
        self.entries.retain(|_, e| e.is_live(now));
    }

    /// Number of stored entries, including ones not yet lazily evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All cache namespaces shared by one session.
pub struct ResponseCache {
    /// Raw fetched bodies keyed by request URL.
    pub documents: TtlCache<String, String>,
    /// Assembled listing responses.
    pub listings: TtlCache<ListingKey, ListingResponse>,
    /// Coupon resolutions keyed by detail URL.
    pub coupons: TtlCache<String, CouponResolution>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            documents: TtlCache::new(ttl, clock.clone()),
            listings: TtlCache::new(ttl, clock.clone()),
            coupons: TtlCache::new(ttl, clock),
        }
    }

    pub fn purge_expired(&self) {
        self.documents.purge_expired();
        self.listings.purge_expired();
        self.coupons.purge_expired();
    }
}
