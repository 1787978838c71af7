//! View state driven by a front-end.
//!
//! `ViewState` keeps everything a table view needs between user actions:
//! the loaded records, the active filter, the filtered result and the page
//! cursor. Each action builds a fresh filtered set or cursor; nothing is
//! mutated in place.

use std::num::NonZeroUsize;
use std::rc::Rc;

use crate::filter::{FilterCriteria, apply_filter};
use crate::paginator::{DEFAULT_PAGE_SIZE, PageCursor, PageView, paginate};
use crate::record::RecordSet;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    all: Rc<RecordSet>,
    filtered: Rc<RecordSet>,
    criteria: FilterCriteria,
    page_size: NonZeroUsize,
    cursor: PageCursor,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::empty()
    }
}

impl ViewState {
    /// Fresh view over `records`: no filter, page 1.
    pub fn new(records: RecordSet, page_size: NonZeroUsize) -> Self {
        let all = Rc::new(records);
        Self {
            cursor: PageCursor::new(all.len(), page_size),
            filtered: Rc::clone(&all),
            all,
            criteria: FilterCriteria::default(),
            page_size,
        }
    }

    /// The state shown when no data could be loaded.
    pub fn empty() -> Self {
        Self::new(RecordSet::default(), DEFAULT_PAGE_SIZE)
    }

    /// Replace the filter and go back to page 1.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        self.filtered = if criteria.is_empty() {
            Rc::clone(&self.all)
        } else {
            Rc::new(apply_filter(&self.all, &criteria))
        };
        self.criteria = criteria;
        self.cursor = self.cursor.reset(self.filtered.len(), self.page_size);
    }

    pub fn next_page(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn prev_page(&mut self) {
        self.cursor = self.cursor.prev();
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to_page(&mut self, page: usize) {
        self.cursor = self.cursor.go_to(page);
    }

    /// The current page, computed on demand.
    pub fn page_view(&self) -> PageView<'_> {
        paginate(&self.filtered, self.page_size, self.cursor.page())
    }

    pub fn page_label(&self) -> String {
        self.page_view().label()
    }

    pub fn has_prev(&self) -> bool {
        self.cursor.has_prev()
    }

    pub fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn total_records(&self) -> usize {
        self.all.len()
    }

    pub fn filtered_records(&self) -> &RecordSet {
        &self.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn state(n: usize) -> ViewState {
        let records: RecordSet = (0..n)
            .map(|i| {
                let month = if i % 2 == 0 { "January" } else { "February" };
                Record::new(2024, month, format!("user{i}@x.com"), "m1", i as u64, 1)
            })
            .collect();
        ViewState::new(records, NonZeroUsize::new(10).unwrap())
    }

    #[test]
    fn test_new_starts_unfiltered_on_page_one() {
        let view = state(35);
        let page = view.page_view();
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.records.len(), 10);
        assert_eq!(view.filtered_records().len(), 35);
        assert!(view.criteria().is_empty());
    }

    #[test]
    fn test_navigation() {
        let mut view = state(35);
        view.prev_page();
        assert_eq!(view.page_view().page_number, 1);

        for _ in 0..10 {
            view.next_page();
        }
        let page = view.page_view();
        assert_eq!(page.page_number, 4);
        assert_eq!(page.records.len(), 5);
        assert!(!view.has_next());
        assert!(view.has_prev());
        assert_eq!(view.page_label(), "Page 4 of 4");
    }

    #[test]
    fn test_filter_resets_to_first_page() {
        let mut view = state(35);
        view.next_page();
        view.next_page();
        view.apply_filter(FilterCriteria::new().with_month("January"));
        let page = view.page_view();
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_pages, 2);
        assert_eq!(view.filtered_records().len(), 18);
        assert_eq!(view.total_records(), 35);
    }

    #[test]
    fn test_filter_reset_even_when_page_still_valid() {
        let mut view = state(35);
        view.next_page();
        view.apply_filter(FilterCriteria::new().with_year(2024));
        assert_eq!(view.page_view().page_number, 1);
    }

    #[test]
    fn test_empty_result_is_page_one_of_one() {
        let mut view = state(35);
        view.next_page();
        view.apply_filter(FilterCriteria::new().with_email("nobody"));
        let page = view.page_view();
        assert_eq!((page.page_number, page.total_pages), (1, 1));
        assert!(page.records.is_empty());
        assert!(!view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn test_clearing_filter_restores_all() {
        let mut view = state(12);
        view.apply_filter(FilterCriteria::new().with_month("February"));
        assert_eq!(view.filtered_records().len(), 6);
        view.apply_filter(FilterCriteria::new());
        assert_eq!(view.filtered_records().len(), 12);
    }

    #[test]
    fn test_empty_state() {
        let view = ViewState::empty();
        assert_eq!(view.total_records(), 0);
        assert_eq!(view.page_label(), "Page 1 of 1");
        assert_eq!(view.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut view = state(35);
        view.go_to_page(9);
        assert_eq!(view.page_view().page_number, 4);
    }
}
