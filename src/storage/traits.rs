use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::{Record, RecordDraft};

/// Storage seam for the canonical record set.
///
/// An implementation owns both the primary record set and the fingerprint
/// index, and must mutate them inside a single atomic section per operation:
/// a reader never observes one structure reflecting a mutation the other does
/// not. All duplicate checks happen inside that atomic section so racing
/// mutations on a colliding fingerprint have exactly one winner.
///
/// An alternative backing store (SQL, etc.) is a drop-in implementation of
/// this trait; it needs point lookup by id, a secondary lookup by
/// fingerprint, and ordering by timestamp.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a freshly created record.
    ///
    /// Fails with [`StoreError::Duplicate`] when a live record already owns
    /// the candidate's fingerprint.
    async fn insert(&self, record: Record) -> Result<Record, StoreError>;

    /// Point lookup by identifier.
    async fn fetch(&self, id: &str) -> Result<Option<Record>, StoreError>;

    /// Replace the fields of an existing record, preserving its identifier
    /// and original timestamp, and swap the fingerprint index entries.
    ///
    /// Fails with [`StoreError::NotFound`] when the id has no live record,
    /// and with [`StoreError::Duplicate`] when the new fingerprint is owned
    /// by a *different* live record (the record never collides with itself).
    async fn replace(&self, id: &str, draft: RecordDraft) -> Result<Record, StoreError>;

    /// Remove a record and release its fingerprint.
    ///
    /// Fails with [`StoreError::NotFound`] when the id has no live record.
    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    /// One consistent window over the records ordered by timestamp
    /// descending, together with the total live count from the same
    /// snapshot. An offset past the end yields an empty window.
    async fn page(&self, offset: usize, limit: usize) -> Result<(Vec<Record>, u64), StoreError>;

    /// Total live records.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Identifier of the live record owning a fingerprint, if any.
    /// Diagnostic surface; the duplicate checks above do not go through it.
    async fn fingerprint_owner(&self, fingerprint: &str) -> Result<Option<String>, StoreError>;
}
