//! # Record Store
//!
//! A concurrent record-management core for structured financial records:
//! create, retrieve, list (paginated), update, and delete, with
//! content-duplicate rejection and a cache-aside layer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      RecordService                          │
//! │  • Operation surface: create/get/list/update/delete        │
//! │  • Explicit cache-aside calls on every path                 │
//! └─────────────────────────────────────────────────────────────┘
//!        │                                          │
//!        ▼ reads                                    ▼ reads
//! ┌──────────────────────┐              ┌──────────────────────┐
//! │    Record Cache      │              │     Page Cache       │
//! │  • key: record id    │              │  • key: (page, size) │
//! │  • LRU + 300s TTL    │              │  • FIFO + 60s TTL    │
//! │  • evict on delete   │              │  • clear on ANY write│
//! └──────────────────────┘              └──────────────────────┘
//!        │ miss                                     │ miss
//!        ▼                                          ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 RecordStore (InMemoryStore)                 │
//! │  • Primary map: id → record                                 │
//! │  • Fingerprint index: content key → id                      │
//! │  • Both behind one lock: one atomic section per mutation    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations go straight to the store (the duplicate check happens inside
//! its atomic section), then repopulate the record cache and invalidate the
//! page cache. Reads consult the relevant cache first and fall through to
//! the store on a miss.
//!
//! ## Quick Start
//!
//! ```rust
//! use record_store::{RecordService, RecordStoreConfig, RecordDraft, RecordType, RecordCategory};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = RecordService::new(RecordStoreConfig::default());
//!
//!     let record = service
//!         .create(RecordDraft {
//!             amount: Decimal::new(10050, 2), // 100.50
//!             kind: RecordType::Deposit,
//!             category: RecordCategory::Salary,
//!             description: Some("March payroll".into()),
//!         })
//!         .await
//!         .expect("create failed");
//!
//!     let page = service.list(0, 10).await.expect("list failed");
//!     assert_eq!(page.total_elements, 1);
//!
//!     service.delete(&record.id).await.expect("delete failed");
//! }
//! ```
//!
//! ## Duplicate Detection
//!
//! Two live records with the same observable content cannot coexist.
//! Content is compared by a normalized fingerprint — amount with trailing
//! fractional zeros stripped, type, category, and a trimmed lowercased
//! description — so `100.00` and `100.0` collide, as do `"Lunch"` and
//! `" lunch "`. See [`fingerprint`] for the exact rules.
//!
//! ## Modules
//!
//! - [`service`]: the [`RecordService`] operation surface
//! - [`storage`]: the [`RecordStore`] trait and in-memory implementation
//! - [`cache`]: single-record and list-page caches
//! - [`fingerprint`]: duplicate-detection normalization
//! - [`record`]: domain types
//! - [`page`]: pagination envelope
//! - [`config`]: tuning knobs
//! - [`metrics`]: `metrics`-crate instrumentation helpers

pub mod cache;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod metrics;
pub mod page;
pub mod record;
pub mod service;
pub mod storage;

pub use cache::{PageCacheStats, RecordCacheStats};
pub use config::RecordStoreConfig;
pub use error::StoreError;
pub use page::Page;
pub use record::{Record, RecordCategory, RecordDraft, RecordType};
pub use service::RecordService;
pub use storage::{InMemoryStore, RecordStore};
pub use crate::metrics::LatencyTimer;
