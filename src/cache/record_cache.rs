// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Single-record cache.
//!
//! Bounded, LRU-style cache in front of the store for get-by-id lookups.
//! Entries carry a write-time TTL; expiry is checked on read. Mutation paths
//! keep it coherent explicitly: populate after create/update/get, evict on
//! delete. A cache problem never surfaces to the caller — the worst case is
//! a miss and a store fallback.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::record::Record;

#[derive(Clone)]
struct CachedRecord {
    record: Record,
    inserted_at: Instant,
}

/// Bounded single-record cache with TTL expiry and LRU eviction.
pub struct RecordCache {
    entries: DashMap<String, CachedRecord>,
    /// Recency order: least recently used at the front
    order: Mutex<VecDeque<String>>,
    max_entries: usize,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    expired: AtomicU64,
}

/// Point-in-time cache counters.
#[derive(Debug, Clone)]
pub struct RecordCacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped because their TTL had elapsed at read time
    pub expired: u64,
    pub entry_count: usize,
    /// Hit rate (0.0 - 1.0)
    pub hit_rate: f64,
}

impl RecordCache {
    /// Create a cache holding at most `max_entries` records, each valid for
    /// `ttl` after insertion.
    #[must_use]
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            order: Mutex::new(VecDeque::new()),
            max_entries,
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expired: AtomicU64::new(0),
        }
    }

    /// Look up a record by id.
    ///
    /// Returns `None` on miss or when the entry's TTL has elapsed; an
    /// expired entry is dropped on the spot.
    pub fn get(&self, id: &str) -> Option<Record> {
        if let Some(entry) = self.entries.get(id) {
            if entry.inserted_at.elapsed() < self.ttl {
                let record = entry.record.clone();
                drop(entry);
                self.touch(id);
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(record);
            }
            self.expired.fetch_add(1, Ordering::Relaxed);
            drop(entry); // Release read lock before removing
            self.remove_entry(id);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Insert or replace the cached copy of a record, evicting from the
    /// least recently used end when at capacity.
    pub fn insert(&self, record: Record) {
        let id = record.id.clone();

        if !self.entries.contains_key(&id) && self.entries.len() >= self.max_entries {
            let mut order = self.order.lock();
            while self.entries.len() >= self.max_entries {
                if let Some(old) = order.pop_front() {
                    self.entries.remove(&old);
                } else {
                    break;
                }
            }
        }

        let is_new = self
            .entries
            .insert(
                id.clone(),
                CachedRecord {
                    record,
                    inserted_at: Instant::now(),
                },
            )
            .is_none();

        if is_new {
            self.order.lock().push_back(id);
        } else {
            self.touch(&id);
        }
    }

    /// Drop one entry. Used on delete so a removed record is never served.
    pub fn evict(&self, id: &str) {
        self.remove_entry(id);
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.entries.clear();
        self.order.lock().clear();
    }

    /// Snapshot the cache counters.
    pub fn stats(&self) -> RecordCacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        RecordCacheStats {
            hits,
            misses,
            expired: self.expired.load(Ordering::Relaxed),
            entry_count: self.entries.len(),
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }

    /// Move an id to the most recently used end.
    /// Linear scan, bounded by the capacity.
    fn touch(&self, id: &str) {
        let mut order = self.order.lock();
        if let Some(pos) = order.iter().position(|k| k == id) {
            order.remove(pos);
            order.push_back(id.to_string());
        }
    }

    fn remove_entry(&self, id: &str) {
        self.entries.remove(id);
        let mut order = self.order.lock();
        if let Some(pos) = order.iter().position(|k| k == id) {
            order.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordCategory, RecordDraft, RecordType};
    use rust_decimal_macros::dec;

    fn test_record(description: &str) -> Record {
        Record::new(RecordDraft {
            amount: dec!(10),
            kind: RecordType::Deposit,
            category: RecordCategory::Other,
            description: Some(description.to_string()),
        })
    }

    fn cache() -> RecordCache {
        RecordCache::new(100, Duration::from_secs(300))
    }

    #[test]
    fn test_hit_after_insert() {
        let cache = cache();
        let record = test_record("coffee");
        cache.insert(record.clone());

        assert_eq!(cache.get(&record.id), Some(record));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_miss_when_absent() {
        let cache = cache();
        assert!(cache.get("missing").is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_insert_replaces() {
        let cache = cache();
        let mut record = test_record("coffee");
        cache.insert(record.clone());

        record.amount = dec!(99);
        cache.insert(record.clone());

        assert_eq!(cache.get(&record.id).unwrap().amount, dec!(99));
        assert_eq!(cache.stats().entry_count, 1);
    }

    #[test]
    fn test_evict() {
        let cache = cache();
        let record = test_record("coffee");
        cache.insert(record.clone());

        cache.evict(&record.id);

        assert!(cache.get(&record.id).is_none());
        assert_eq!(cache.stats().entry_count, 0);
    }

    #[test]
    fn test_expired_entry_dropped() {
        let cache = RecordCache::new(100, Duration::ZERO);
        let record = test_record("coffee");
        cache.insert(record.clone());

        assert!(cache.get(&record.id).is_none());
        let stats = cache.stats();
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entry_count, 0);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let cache = RecordCache::new(3, Duration::from_secs(300));
        let a = test_record("a");
        let b = test_record("b");
        let c = test_record("c");
        cache.insert(a.clone());
        cache.insert(b.clone());
        cache.insert(c.clone());

        // Touch `a` so `b` becomes the LRU entry
        assert!(cache.get(&a.id).is_some());

        let d = test_record("d");
        cache.insert(d.clone());

        assert_eq!(cache.stats().entry_count, 3);
        assert!(cache.get(&b.id).is_none());
        assert!(cache.get(&a.id).is_some());
        assert!(cache.get(&d.id).is_some());
    }

    #[test]
    fn test_hit_rate() {
        let cache = cache();
        let record = test_record("coffee");
        cache.insert(record.clone());

        cache.get(&record.id);
        cache.get(&record.id);
        cache.get(&record.id);
        cache.get("missing");

        let stats = cache.stats();
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate - 0.75).abs() < 0.01);
    }

    #[test]
    fn test_clear() {
        let cache = cache();
        for i in 0..10 {
            cache.insert(test_record(&format!("item {i}")));
        }
        assert_eq!(cache.stats().entry_count, 10);

        cache.clear();
        assert_eq!(cache.stats().entry_count, 0);
    }
}
