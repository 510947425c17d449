//! Cache layer in front of the record store.
//!
//! Two independently configured caches: a single-record cache for get-by-id
//! and a short-lived page cache for list results. Cache presence never
//! changes the logical result of an operation, only its latency.

pub mod page_cache;
pub mod record_cache;

pub use page_cache::{PageCache, PageCacheStats};
pub use record_cache::{RecordCache, RecordCacheStats};
