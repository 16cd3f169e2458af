/// Articles shown per results page.
pub const PAGE_SIZE: usize = 5;

/// Pagination over a fixed-order article list.
///
/// `current` is 1-based and always clamped to `[1, total_pages]`. An empty
/// list still has one (empty) page, so "Page 1 of 1" renders rather than a
/// zero page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: usize,
    pub current: usize,
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            page_size: PAGE_SIZE,
            current: 1,
        }
    }

    /// Total pages for `count` items: `max(1, ceil(count / page_size))`.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).max(1)
    }

    /// Half-open index range of the current page within `count` items.
    pub fn page_bounds(&self, count: usize) -> std::ops::Range<usize> {
        let page = self.current.min(self.total_pages(count));
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(count);
        start.min(count)..end
    }

    /// Advance one page, clamped at the last page. Returns true if moved.
    pub fn next(&mut self, count: usize) -> bool {
        if self.current < self.total_pages(count) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page, clamped at page 1. Returns true if moved.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn at_first(&self) -> bool {
        self.current == 1
    }

    pub fn at_last(&self, count: usize) -> bool {
        self.current >= self.total_pages(count)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_matches_ceil_over_page_size() {
        let p = Pagination::new();
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(5), 1);
        assert_eq!(p.total_pages(6), 2);
        assert_eq!(p.total_pages(7), 2);
        assert_eq!(p.total_pages(10), 2);
        assert_eq!(p.total_pages(11), 3);
    }

    #[test]
    fn page_slices_cover_all_items_in_order_without_duplicates() {
        for count in 0..=23 {
            let mut p = Pagination::new();
            let mut seen = Vec::new();
            loop {
                seen.extend(p.page_bounds(count));
                if !p.next(count) {
                    break;
                }
            }
            let expected: Vec<usize> = (0..count).collect();
            assert_eq!(seen, expected, "count = {count}");
        }
    }

    #[test]
    fn next_at_last_page_is_a_noop() {
        let mut p = Pagination::new();
        assert!(p.next(7));
        assert_eq!(p.current, 2);
        assert!(!p.next(7));
        assert_eq!(p.current, 2);
    }

    #[test]
    fn prev_at_first_page_is_a_noop() {
        let mut p = Pagination::new();
        assert!(!p.prev());
        assert_eq!(p.current, 1);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let p = Pagination::new();
        assert_eq!(p.total_pages(0), 1);
        assert!(p.page_bounds(0).is_empty());
        assert!(p.at_first());
        assert!(p.at_last(0));
    }

    #[test]
    fn boundary_flags_track_page_movement() {
        let mut p = Pagination::new();
        assert!(p.at_first());
        assert!(!p.at_last(12));
        assert!(p.next(12));
        assert!(!p.at_first());
        assert!(!p.at_last(12));
        assert!(p.next(12));
        assert!(p.at_last(12));
        assert!(p.prev());
        assert!(p.prev());
        assert!(p.at_first());
    }

    #[test]
    fn seven_articles_paginate_five_then_two() {
        let mut p = Pagination::new();
        assert_eq!(p.page_bounds(7), 0..5);
        assert!(!p.at_last(7));
        p.next(7);
        assert_eq!(p.page_bounds(7), 5..7);
        assert!(p.at_last(7));
    }
}
