//! Paginator — splits a record sequence into fixed-size sheets.
//!
//! Pages are borrowed slices of the input, in order. Only the last page may be
//! short, and it is never padded. An empty input yields no pages at all.

use serde::Serialize;

/// One sheet's worth of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    /// 0-based page number.
    pub index: usize,
    /// Position of `records[0]` in the full sequence.
    pub first_index: usize,
    pub records: &'a [T],
}

impl<T> Page<'_, T> {
    /// Global sequence position of each record on this page.
    pub fn global_indices(&self) -> std::ops::Range<usize> {
        self.first_index..self.first_index + self.records.len()
    }
}

/// `ceil(record_count / cards_per_page)`. Zero records means zero pages.
pub fn total_pages(record_count: usize, cards_per_page: u64) -> usize {
    record_count.div_ceil(page_len(cards_per_page))
}

/// Partitions `records` into pages of `cards_per_page` records.
///
/// A `cards_per_page` of 0 is treated as 1.
pub fn paginate<T>(records: &[T], cards_per_page: u64) -> Vec<Page<'_, T>> {
    let len = page_len(cards_per_page);
    records
        .chunks(len)
        .enumerate()
        .map(|(index, chunk)| Page {
            index,
            first_index: index * len,
            records: chunk,
        })
        .collect()
}

fn page_len(cards_per_page: u64) -> usize {
    usize::try_from(cards_per_page).unwrap_or(usize::MAX).max(1)
}
