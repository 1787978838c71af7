//! Fixed-size pagination and page navigation.
//!
//! Pages are numbered from 1. There is always at least one page, so an
//! empty set shows "Page 1 of 1" with no rows.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::record::Record;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(25).unwrap();

/// Number of pages needed for `len` records, never less than 1.
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// The records on page `page_number`, clamped to what exists.
///
/// Out-of-range pages (including page 0) yield an empty slice.
pub fn get_page(records: &[Record], page_size: NonZeroUsize, page_number: usize) -> &[Record] {
    let Some(index) = page_number.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size.get()).min(records.len());
    let end = start.saturating_add(page_size.get()).min(records.len());
    &records[start..end]
}

/// One rendered page plus its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<'a> {
    pub page_number: usize,
    pub total_pages: usize,
    pub records: &'a [Record],
}

impl PageView<'_> {
    pub fn has_prev(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// "Page N of M".
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_number, self.total_pages)
    }
}

/// Build the view for `page_number`, clamped into `1..=page_count`.
pub fn paginate(records: &[Record], page_size: NonZeroUsize, page_number: usize) -> PageView<'_> {
    let total_pages = page_count(records.len(), page_size);
    let page_number = page_number.clamp(1, total_pages);
    PageView {
        page_number,
        total_pages,
        records: get_page(records, page_size, page_number),
    }
}

/// Current page position. A plain value owned by whoever drives the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    total: usize,
}

impl PageCursor {
    /// Cursor on page 1 of a set of `len` records.
    pub fn new(len: usize, page_size: NonZeroUsize) -> Self {
        Self {
            page: 1,
            total: page_count(len, page_size),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total
    }

    /// Previous page; unchanged on page 1.
    pub fn prev(self) -> Self {
        if self.has_prev() {
            Self {
                page: self.page - 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Next page; unchanged on the last page.
    pub fn next(self) -> Self {
        if self.has_next() {
            Self {
                page: self.page + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Back to page 1 of a (possibly new) set of `len` records.
    ///
    /// Used on every filter change, whatever the old page was.
    pub fn reset(self, len: usize, page_size: NonZeroUsize) -> Self {
        Self::new(len, page_size)
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to(self, page: usize) -> Self {
        Self {
            page: page.clamp(1, self.total),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(2024, "May", format!("u{i}@x.com"), "m", i as u64, 0))
            .collect()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, size(25)), 1);
        assert_eq!(page_count(1, size(25)), 1);
        assert_eq!(page_count(25, size(25)), 1);
        assert_eq!(page_count(26, size(25)), 2);
        assert_eq!(page_count(50, size(25)), 2);
        assert_eq!(page_count(7, size(1)), 7);
    }

    #[test]
    fn test_get_page_slices() {
        let recs = records(7);
        assert_eq!(get_page(&recs, size(3), 1), &recs[0..3]);
        assert_eq!(get_page(&recs, size(3), 2), &recs[3..6]);
        assert_eq!(get_page(&recs, size(3), 3), &recs[6..7]);
    }

    #[test]
    fn test_get_page_out_of_range_is_empty() {
        let recs = records(7);
        assert!(get_page(&recs, size(3), 0).is_empty());
        assert!(get_page(&recs, size(3), 4).is_empty());
        assert!(get_page(&recs, size(3), usize::MAX).is_empty());
        assert!(get_page(&[], size(3), 1).is_empty());
    }

    #[test]
    fn test_paginate_clamps_page_number() {
        let recs = records(7);
        let view = paginate(&recs, size(3), 99);
        assert_eq!(view.page_number, 3);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.records.len(), 1);

        let view = paginate(&recs, size(3), 0);
        assert_eq!(view.page_number, 1);
        assert_eq!(view.records.len(), 3);
    }

    #[test]
    fn test_paginate_empty_set() {
        let view = paginate(&[], DEFAULT_PAGE_SIZE, 1);
        assert_eq!(view.page_number, 1);
        assert_eq!(view.total_pages, 1);
        assert!(view.records.is_empty());
        assert!(!view.has_prev());
        assert!(!view.has_next());
        assert_eq!(view.label(), "Page 1 of 1");
    }

    #[test]
    fn test_cursor_prev_at_first_is_noop() {
        let cursor = PageCursor::new(60, size(25));
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.prev(), cursor);
    }

    #[test]
    fn test_cursor_next_at_last_is_noop() {
        let cursor = PageCursor::new(60, size(25)).next().next();
        assert_eq!(cursor.page(), 3);
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), cursor);
        assert_eq!(cursor.prev().page(), 2);
    }

    #[test]
    fn test_cursor_single_page() {
        let cursor = PageCursor::new(0, size(25));
        assert_eq!(cursor.total(), 1);
        assert!(!cursor.has_prev());
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_cursor_reset_always_returns_to_first_page() {
        let cursor = PageCursor::new(100, size(10)).go_to(7);
        assert_eq!(cursor.page(), 7);
        let reset = cursor.reset(100, size(10));
        assert_eq!(reset.page(), 1);
        let reset = cursor.reset(0, size(10));
        assert_eq!((reset.page(), reset.total()), (1, 1));
    }

    #[test]
    fn test_cursor_go_to_clamps() {
        let cursor = PageCursor::new(30, size(10));
        assert_eq!(cursor.go_to(0).page(), 1);
        assert_eq!(cursor.go_to(99).page(), 3);
    }
}
