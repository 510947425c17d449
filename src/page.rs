//! Pagination envelope.

use serde::{Deserialize, Serialize};

/// A materialized page of results plus pagination metadata.
///
/// `total_pages` is `ceil(total_elements / size)` (0 when size is 0),
/// `first` is true on page 0, and `last` is true on the final page —
/// including the degenerate case of an empty result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: usize,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// Build a page envelope from a materialized window and the total count.
    #[must_use]
    pub fn of(items: Vec<T>, page: usize, size: usize, total_elements: u64) -> Self {
        let total_pages = if size > 0 {
            ((total_elements + size as u64 - 1) / size as u64) as usize
        } else {
            0
        };
        Self {
            items,
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last: total_pages == 0 || page + 1 >= total_pages,
        }
    }
}
