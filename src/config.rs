//! Configuration for the record store.
//!
//! # Example
//!
//! ```
//! use record_store::RecordStoreConfig;
//!
//! // Minimal config (uses defaults)
//! let config = RecordStoreConfig::default();
//! assert_eq!(config.record_cache_max_entries, 1000);
//! assert_eq!(config.page_cache_ttl_secs, 60);
//!
//! // Full config
//! let config = RecordStoreConfig {
//!     record_cache_ttl_secs: 600,
//!     max_page_size: 50,
//!     ..Default::default()
//! };
//! ```

use serde::Deserialize;

/// Configuration for the record store and its caches.
///
/// All fields have sensible defaults. The page cache TTL is deliberately
/// shorter than the record cache TTL: any write anywhere invalidates every
/// page, so stale pages must age out quickly even if an invalidation is
/// missed.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordStoreConfig {
    /// Single-record cache capacity (default: 1000 entries)
    #[serde(default = "default_record_cache_max_entries")]
    pub record_cache_max_entries: usize,

    /// Single-record cache time-to-live in seconds (default: 300)
    #[serde(default = "default_record_cache_ttl_secs")]
    pub record_cache_ttl_secs: u64,

    /// List-page cache capacity (default: 100 entries)
    #[serde(default = "default_page_cache_max_entries")]
    pub page_cache_max_entries: usize,

    /// List-page cache time-to-live in seconds (default: 60)
    #[serde(default = "default_page_cache_ttl_secs")]
    pub page_cache_ttl_secs: u64,

    /// Page size used when the caller passes 0 (default: 10)
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound any requested page size is clamped to (default: 100)
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

fn default_record_cache_max_entries() -> usize { 1000 }
fn default_record_cache_ttl_secs() -> u64 { 300 }
fn default_page_cache_max_entries() -> usize { 100 }
fn default_page_cache_ttl_secs() -> u64 { 60 }
fn default_page_size() -> usize { 10 }
fn default_max_page_size() -> usize { 100 }

impl Default for RecordStoreConfig {
    fn default() -> Self {
        Self {
            record_cache_max_entries: default_record_cache_max_entries(),
            record_cache_ttl_secs: default_record_cache_ttl_secs(),
            page_cache_max_entries: default_page_cache_max_entries(),
            page_cache_ttl_secs: default_page_cache_ttl_secs(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecordStoreConfig::default();
        assert_eq!(config.record_cache_max_entries, 1000);
        assert_eq!(config.record_cache_ttl_secs, 300);
        assert_eq!(config.page_cache_max_entries, 100);
        assert_eq!(config.page_cache_ttl_secs, 60);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, 100);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RecordStoreConfig =
            serde_json::from_str(r#"{"max_page_size": 25}"#).unwrap();
        assert_eq!(config.max_page_size, 25);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let config: RecordStoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.page_cache_ttl_secs, 60);
    }
}
