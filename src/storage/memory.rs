// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Canonical in-memory record store.
//!
//! The primary record map and the fingerprint index live inside a single
//! `RwLock`, so every mutation is one atomic section: the two structures can
//! never be observed out of step, and racing create/update/delete on a
//! colliding fingerprint or identifier have exactly one winner. Reads share
//! the read lock and see a consistent snapshot.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::traits::RecordStore;
use crate::error::StoreError;
use crate::record::{Record, RecordDraft};

/// A record plus its insertion sequence.
///
/// The sequence is the list-ordering tiebreaker for records created at the
/// same instant; it never leaves the store.
struct StoredRecord {
    record: Record,
    seq: u64,
}

#[derive(Default)]
struct StoreInner {
    /// Primary set: id -> record
    records: HashMap<String, StoredRecord>,
    /// Secondary index: content fingerprint -> owning record id
    by_fingerprint: HashMap<String, String>,
    next_seq: u64,
}

/// Concurrent in-memory implementation of [`RecordStore`].
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Current record count
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    /// Drop all records and index entries (test setup helper)
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.records.clear();
        inner.by_fingerprint.clear();
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn insert(&self, record: Record) -> Result<Record, StoreError> {
        let fingerprint = record.fingerprint();
        let mut inner = self.inner.write();

        if inner.by_fingerprint.contains_key(&fingerprint) {
            return Err(StoreError::Duplicate { fingerprint });
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.by_fingerprint.insert(fingerprint, record.id.clone());
        inner.records.insert(
            record.id.clone(),
            StoredRecord {
                record: record.clone(),
                seq,
            },
        );
        Ok(record)
    }

    async fn fetch(&self, id: &str) -> Result<Option<Record>, StoreError> {
        Ok(self.inner.read().records.get(id).map(|s| s.record.clone()))
    }

    async fn replace(&self, id: &str, draft: RecordDraft) -> Result<Record, StoreError> {
        let mut inner = self.inner.write();

        let (updated, old_fingerprint) = match inner.records.get(id) {
            Some(stored) => (stored.record.with_draft(draft), stored.record.fingerprint()),
            None => return Err(StoreError::NotFound { id: id.to_string() }),
        };

        let new_fingerprint = updated.fingerprint();
        if let Some(owner) = inner.by_fingerprint.get(&new_fingerprint) {
            // A record resubmitting its own content is not a collision.
            if owner != id {
                return Err(StoreError::Duplicate {
                    fingerprint: new_fingerprint,
                });
            }
        }

        inner.by_fingerprint.remove(&old_fingerprint);
        inner
            .by_fingerprint
            .insert(new_fingerprint, id.to_string());
        if let Some(stored) = inner.records.get_mut(id) {
            stored.record = updated.clone();
        }
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write();

        match inner.records.remove(id) {
            Some(stored) => {
                inner.by_fingerprint.remove(&stored.record.fingerprint());
                Ok(())
            }
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    async fn page(&self, offset: usize, limit: usize) -> Result<(Vec<Record>, u64), StoreError> {
        let inner = self.inner.read();

        let mut stored: Vec<&StoredRecord> = inner.records.values().collect();
        // Most recent first; same-instant creations fall back to insertion
        // order, newest first.
        stored.sort_by(|a, b| {
            b.record
                .timestamp
                .cmp(&a.record.timestamp)
                .then(b.seq.cmp(&a.seq))
        });

        let window = stored
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|s| s.record.clone())
            .collect();
        Ok((window, inner.records.len() as u64))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().records.len() as u64)
    }

    async fn fingerprint_owner(&self, fingerprint: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.read().by_fingerprint.get(fingerprint).cloned())
    }
}
