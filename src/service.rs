// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Record service: cache-aside orchestration over the store.
//!
//! The [`RecordService`] is the operation surface of the crate. Every read
//! consults the relevant cache first and falls through to the store on a
//! miss; every mutation goes straight to the store, then repopulates or
//! evicts the single-record cache and unconditionally invalidates the page
//! cache. The cache calls are explicit, not interception: each operation
//! spells out exactly which cache it touches and when.
//!
//! # Example
//!
//! ```
//! use record_store::{RecordService, RecordStoreConfig, RecordDraft, RecordType, RecordCategory};
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let service = RecordService::new(RecordStoreConfig::default());
//!
//! let record = service
//!     .create(RecordDraft {
//!         amount: Decimal::new(10050, 2),
//!         kind: RecordType::Deposit,
//!         category: RecordCategory::Salary,
//!         description: Some("March payroll".into()),
//!     })
//!     .await
//!     .expect("create failed");
//!
//! let fetched = service.get(&record.id).await.expect("get failed");
//! assert_eq!(fetched, record);
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::{PageCache, PageCacheStats, RecordCache, RecordCacheStats};
use crate::config::RecordStoreConfig;
use crate::error::StoreError;
use crate::metrics;
use crate::page::Page;
use crate::record::{Record, RecordDraft};
use crate::storage::{InMemoryStore, RecordStore};

/// Cache-aside front over a [`RecordStore`].
///
/// # Thread Safety
///
/// All methods take `&self`; share the service behind an `Arc` across any
/// number of tasks. Consistency between the store's primary set and its
/// fingerprint index is the store's job; the two caches are independent
/// resources with no cross-cache atomicity (the page cache TTL backstops
/// the window between a record-cache update and a page invalidation).
pub struct RecordService {
    store: Arc<dyn RecordStore>,
    record_cache: RecordCache,
    page_cache: PageCache,
    config: RecordStoreConfig,
}

impl RecordService {
    /// Create a service backed by the canonical in-memory store.
    #[must_use]
    pub fn new(config: RecordStoreConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryStore::new()))
    }

    /// Create a service over a drop-in backing store.
    #[must_use]
    pub fn with_store(config: RecordStoreConfig, store: Arc<dyn RecordStore>) -> Self {
        let record_cache = RecordCache::new(
            config.record_cache_max_entries,
            Duration::from_secs(config.record_cache_ttl_secs),
        );
        let page_cache = PageCache::new(
            config.page_cache_max_entries,
            Duration::from_secs(config.page_cache_ttl_secs),
        );
        Self {
            store,
            record_cache,
            page_cache,
            config,
        }
    }

    /// Create a record.
    ///
    /// Assigns a fresh identifier and the current timestamp, rejects
    /// content colliding with a live record, populates the record cache
    /// with the stored result, and invalidates every cached list page.
    pub async fn create(&self, draft: RecordDraft) -> Result<Record, StoreError> {
        let _timer = metrics::LatencyTimer::new("create");
        debug!(?draft, "creating record");

        let record = Record::new(draft);
        match self.store.insert(record).await {
            Ok(stored) => {
                self.record_cache.insert(stored.clone());
                self.invalidate_pages();
                metrics::record_operation("create", "success");
                if let Ok(count) = self.store.count().await {
                    metrics::set_record_count(count);
                }
                info!(id = %stored.id, "created record");
                Ok(stored)
            }
            Err(err) => {
                warn!(error = %err, "create rejected");
                metrics::record_operation("create", err.status_label());
                Err(err)
            }
        }
    }

    /// Fetch a record by id, serving from the record cache when possible.
    pub async fn get(&self, id: &str) -> Result<Record, StoreError> {
        let _timer = metrics::LatencyTimer::new("get");
        debug!(%id, "getting record");

        if let Some(record) = self.record_cache.get(id) {
            metrics::record_cache_access("record", "hit");
            metrics::record_operation("get", "success");
            return Ok(record);
        }
        metrics::record_cache_access("record", "miss");

        match self.store.fetch(id).await? {
            Some(record) => {
                self.record_cache.insert(record.clone());
                metrics::record_operation("get", "success");
                Ok(record)
            }
            None => {
                warn!(%id, "record not found");
                metrics::record_operation("get", "not_found");
                Err(StoreError::NotFound { id: id.to_string() })
            }
        }
    }

    /// List records, most recent first.
    ///
    /// `size` is defaulted when 0 and clamped to the configured maximum.
    /// A page past the end is an empty page, never an error. Results are
    /// served from the page cache when a fresh entry exists.
    pub async fn list(&self, page: usize, size: usize) -> Result<Page<Record>, StoreError> {
        let _timer = metrics::LatencyTimer::new("list");

        let size = if size == 0 {
            self.config.default_page_size
        } else {
            size.min(self.config.max_page_size)
        };
        debug!(page, size, "listing records");

        if let Some(cached) = self.page_cache.get(page, size) {
            metrics::record_cache_access("page", "hit");
            metrics::record_operation("list", "success");
            return Ok(cached);
        }
        metrics::record_cache_access("page", "miss");

        let offset = page.saturating_mul(size);
        let (items, total) = self.store.page(offset, size).await?;
        let envelope = Page::of(items, page, size, total);
        self.page_cache.insert(page, size, envelope.clone());
        metrics::record_operation("list", "success");
        Ok(envelope)
    }

    /// Update a record's fields, preserving its identifier and original
    /// timestamp.
    ///
    /// Rejects content colliding with a *different* live record (a record
    /// resubmitting its own content succeeds). On success the record cache
    /// holds the fresh value and every cached list page is invalidated.
    pub async fn update(&self, id: &str, draft: RecordDraft) -> Result<Record, StoreError> {
        let _timer = metrics::LatencyTimer::new("update");
        debug!(%id, ?draft, "updating record");

        match self.store.replace(id, draft).await {
            Ok(updated) => {
                self.record_cache.insert(updated.clone());
                self.invalidate_pages();
                metrics::record_operation("update", "success");
                info!(%id, "updated record");
                Ok(updated)
            }
            Err(err) => {
                warn!(%id, error = %err, "update rejected");
                metrics::record_operation("update", err.status_label());
                Err(err)
            }
        }
    }

    /// Delete a record, releasing its fingerprint for reuse.
    ///
    /// Evicts the single cached entry and invalidates every cached list
    /// page, so a deleted record is never served.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let _timer = metrics::LatencyTimer::new("delete");
        debug!(%id, "deleting record");

        match self.store.remove(id).await {
            Ok(()) => {
                self.record_cache.evict(id);
                self.invalidate_pages();
                metrics::record_operation("delete", "success");
                if let Ok(count) = self.store.count().await {
                    metrics::set_record_count(count);
                }
                info!(%id, "deleted record");
                Ok(())
            }
            Err(err) => {
                warn!(%id, error = %err, "delete rejected");
                metrics::record_operation("delete", err.status_label());
                Err(err)
            }
        }
    }

    /// Total live records.
    pub async fn count(&self) -> Result<u64, StoreError> {
        self.store.count().await
    }

    /// Counters for the single-record cache.
    #[must_use]
    pub fn record_cache_stats(&self) -> RecordCacheStats {
        self.record_cache.stats()
    }

    /// Counters for the list-page cache.
    #[must_use]
    pub fn page_cache_stats(&self) -> PageCacheStats {
        self.page_cache.stats()
    }

    fn invalidate_pages(&self) {
        self.page_cache.invalidate_all();
        metrics::record_page_cache_invalidation();
    }
}
