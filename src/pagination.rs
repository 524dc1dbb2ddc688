use std::ops::RangeInclusive;

/// Inclusive range of page numbers offered as direct navigation buttons.
/// Empty when `end < start`, which happens only when there are no pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub const EMPTY: PageWindow = PageWindow { start: 1, end: 0 };

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn contains(&self, page: usize) -> bool {
        self.pages().contains(&page)
    }
}

/// Number of pages needed for `item_count` items, zero when there are none.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// Clamps a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Sliding window of at most `max_visible` pages centred on `page`, shifted
/// back inside `[1, total_pages]` near either edge. A `page` past the end is
/// treated as the last page.
pub fn page_window(page: usize, total_pages: usize, max_visible: usize) -> PageWindow {
    if max_visible == 0 || total_pages == 0 {
        return PageWindow::EMPTY;
    }

    let page = page.min(total_pages);
    let max_visible = max_visible.min(total_pages);
    let half = max_visible / 2;
    let start = page.saturating_sub(half).max(1);

    match start.checked_add(max_visible - 1) {
        Some(end) if end <= total_pages => PageWindow { start, end },
        // Past the last page: end the window on it instead.
        _ => PageWindow {
            start: total_pages - max_visible + 1,
            end: total_pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, 10, 1, 7)]
    #[case(10, 10, 4, 10)]
    #[case(5, 10, 2, 8)]
    #[case(2, 10, 1, 7)]
    #[case(8, 10, 4, 10)]
    #[case(1, 3, 1, 3)]
    #[case(3, 3, 1, 3)]
    #[case(1, 1, 1, 1)]
    fn test_window_of_seven(
        #[case] page: usize,
        #[case] total: usize,
        #[case] start: usize,
        #[case] end: usize,
    ) {
        assert_eq!(page_window(page, total, 7), PageWindow { start, end });
    }

    #[test]
    fn test_no_pages_gives_empty_window() {
        let window = page_window(1, 0, 7);
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.pages().count(), 0);
    }

    #[test]
    fn test_even_width_window() {
        assert_eq!(page_window(5, 20, 4), PageWindow { start: 3, end: 6 });
    }

    #[rstest]
    #[case(usize::MAX, 10, 7, 4, 10)]
    #[case(11, 10, 7, 4, 10)]
    #[case(2, 10, usize::MAX, 1, 10)]
    #[case(usize::MAX, usize::MAX, usize::MAX, 1, usize::MAX)]
    #[case(usize::MAX, usize::MAX, 3, usize::MAX - 2, usize::MAX)]
    fn test_extreme_inputs_stay_in_range(
        #[case] page: usize,
        #[case] total: usize,
        #[case] max_visible: usize,
        #[case] start: usize,
        #[case] end: usize,
    ) {
        assert_eq!(page_window(page, total, max_visible), PageWindow { start, end });
    }

    #[rstest]
    #[case(0, 3, 1)]
    #[case(1, 3, 1)]
    #[case(3, 3, 3)]
    #[case(9, 3, 3)]
    #[case(5, 0, 1)]
    fn test_clamp_page(#[case] page: usize, #[case] total: usize, #[case] expected: usize) {
        assert_eq!(clamp_page(page, total), expected);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 2), 3);
    }
}
