//! Fixed-size pagination over the filtered record sequence.
//!
//! Pages are 1-based. A sequence of `n` records has `ceil(n / page_size)`
//! pages; an empty sequence has zero pages, and the current page then sits
//! at 1 with an empty row range.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Which paging affordances apply for a given sequence length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub count: usize,
    pub can_first: bool,
    pub can_previous: bool,
    pub can_next: bool,
    pub can_last: bool,
}

impl PageControls {
    /// Every page number, empty when there are no pages.
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        1..=self.count
    }
}

impl Paginator {
    /// Creates a paginator on page 1. A zero page size is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Moves to page `page`, clamped to `[1, max(page_count, 1)]`.
    ///
    /// Returns `true` when the current page changed.
    pub fn set_page(&mut self, page: usize, len: usize) -> bool {
        let last = self.page_count(len).max(1);
        let target = page.clamp(1, last);
        if target == self.current_page {
            return false;
        }
        tracing::debug!(from = self.current_page, to = target, requested = page, "page change");
        self.current_page = target;
        true
    }

    pub fn first(&mut self, len: usize) -> bool {
        self.set_page(1, len)
    }

    pub fn previous(&mut self, len: usize) -> bool {
        self.set_page(self.current_page.saturating_sub(1), len)
    }

    pub fn next(&mut self, len: usize) -> bool {
        self.set_page(self.current_page.saturating_add(1), len)
    }

    pub fn last(&mut self, len: usize) -> bool {
        self.set_page(self.page_count(len), len)
    }

    /// Back to page 1, used whenever the filter result changes.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pulls the current page back inside the valid range after the sequence
    /// shrank.
    pub fn clamp(&mut self, len: usize) -> bool {
        self.set_page(self.current_page, len)
    }

    /// Positions within the filtered sequence shown on the current page.
    #[must_use]
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    #[must_use]
    pub fn controls(&self, len: usize) -> PageControls {
        let count = self.page_count(len);
        let current = self.current_page;
        PageControls {
            current,
            count,
            can_first: current > 1,
            can_previous: current > 1,
            can_next: current < count,
            can_last: current < count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling() {
        let pager = Paginator::default();
        assert_eq!(pager.page_count(0), 0);
        assert_eq!(pager.page_count(1), 1);
        assert_eq!(pager.page_count(10), 1);
        assert_eq!(pager.page_count(11), 2);
        assert_eq!(pager.page_count(25), 3);
    }

    #[test]
    fn second_page_of_twenty_five() {
        let mut pager = Paginator::default();
        assert!(pager.set_page(2, 25));
        assert_eq!(pager.range(25), 10..20);
        assert!(pager.last(25));
        assert_eq!(pager.range(25), 20..25);
    }

    #[test]
    fn out_of_range_requests_are_clamped() {
        let mut pager = Paginator::default();
        assert!(pager.set_page(99, 25));
        assert_eq!(pager.current_page(), 3);
        assert!(pager.set_page(0, 25));
        assert_eq!(pager.current_page(), 1);
        assert!(!pager.previous(25));
        assert!(!pager.set_page(4, 0));
        assert_eq!(pager.range(0), 0..0);
    }

    #[test]
    fn controls_disable_at_boundaries() {
        let mut pager = Paginator::default();
        let controls = pager.controls(25);
        assert!(!controls.can_first && !controls.can_previous);
        assert!(controls.can_next && controls.can_last);
        assert_eq!(controls.pages().collect::<Vec<_>>(), vec![1, 2, 3]);

        pager.last(25);
        let controls = pager.controls(25);
        assert!(controls.can_previous && !controls.can_next);

        let empty = Paginator::default().controls(0);
        assert_eq!(empty.pages().count(), 0);
        assert!(!empty.can_next && !empty.can_last);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut pager = Paginator::default();
        pager.set_page(3, 25);
        assert!(pager.clamp(15));
        assert_eq!(pager.current_page(), 2);
        assert!(pager.clamp(0));
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn zero_page_size_is_coerced() {
        assert_eq!(Paginator::new(0).page_size(), 1);
    }
}
