// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! List-page cache.
//!
//! Caches materialized list pages keyed by `(page, size)`. Page contents
//! depend on every record's existence and ordering, so invalidation is
//! deliberately coarse: any successful create, update, or delete clears the
//! whole cache. The short TTL is the backstop for an invalidation that
//! races with a concurrent fill.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::page::Page;
use crate::record::Record;

/// Cache key: (page, size)
type PageKey = (usize, usize);

#[derive(Clone)]
struct CachedPage {
    page: Page<Record>,
    inserted_at: Instant,
}

/// Bounded short-TTL cache of list pages with whole-cache invalidation.
pub struct PageCache {
    entries: DashMap<PageKey, CachedPage>,
    /// Insertion order for eviction (oldest first)
    order: Mutex<VecDeque<PageKey>>,
    max_entries: usize,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    invalidations: AtomicU64,
}

/// Point-in-time cache counters.
#[derive(Debug, Clone)]
pub struct PageCacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Whole-cache invalidations triggered by writes
    pub invalidations: u64,
    pub entry_count: usize,
    /// Hit rate (0.0 - 1.0)
    pub hit_rate: f64,
}

impl PageCache {
    /// Create a cache holding at most `max_entries` pages, each valid for
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
            invalidations: AtomicU64::new(0),
        }
    }

    /// Look up a cached page for `(page, size)`.
    pub fn get(&self, page: usize, size: usize) -> Option<Page<Record>> {
        let key = (page, size);

        if let Some(entry) = self.entries.get(&key) {
            if entry.inserted_at.elapsed() < self.ttl {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.page.clone());
            }
            drop(entry); // Release read lock before removing
            self.entries.remove(&key);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Cache a materialized page, evicting the oldest entries at capacity.
    pub fn insert(&self, page_number: usize, size: usize, page: Page<Record>) {
        let key = (page_number, size);

        if self.entries.len() >= self.max_entries {
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
                key,
                CachedPage {
                    page,
                    inserted_at: Instant::now(),
                },
            )
            .is_none();

        if is_new {
            self.order.lock().push_back(key);
        }
    }

    /// Evict every cached page. Called after any successful mutation.
    pub fn invalidate_all(&self) {
        self.entries.clear();
        self.order.lock().clear();
        self.invalidations.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the cache counters.
    pub fn stats(&self) -> PageCacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        PageCacheStats {
            hits,
            misses,
            invalidations: self.invalidations.load(Ordering::Relaxed),
            entry_count: self.entries.len(),
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}
