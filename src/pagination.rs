// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Pagination and vertical layout.
//!
//! The viewport is cut into a grid of dots `pitch` pixels apart. Each logical
//! row takes a block of `7 + row_spacing` grid rows; when the rows don't all
//! fit, they are split into pages that rotate every `page_interval` ms.
//!
//! ```text
//!   total_grid_rows = 50, row_spacing = 2
//!   rows_per_block  = 9  -> rows_per_page = 5
//!   12 rows         -> 3 pages: [0..5) [5..10) [10..12)
//! ```
//! The visible block of a page is centered vertically, the spacing after the
//! last visible row is not charged.

use crate::font::GLYPH_HEIGHT;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutPlan {
    pub rows_per_page: usize,
    pub total_pages: usize,
    pub cols: u32,
    pub total_grid_rows: u32,
    pub row_spacing: u32,
}

impl LayoutPlan {
    /// grid rows of one logical row including its trailing gap
    pub fn rows_per_block(&self) -> u32 {
        GLYPH_HEIGHT as u32 + self.row_spacing
    }

    /// Index range of the rows shown on `page`.
    pub fn page_rows(&self, page: usize, row_count: usize) -> std::ops::Range<usize> {
        let start = (page * self.rows_per_page).min(row_count);
        let end = (start + self.rows_per_page).min(row_count);
        start..end
    }
}

fn div_ceil(a: u32, b: u32) -> u32 {
    a.div_ceil(b.max(1))
}

/// Computes the grid and page split for a viewport in pixels.
pub fn plan(
    viewport_height: u32,
    viewport_width: u32,
    pitch: u32,
    row_count: usize,
    row_spacing: u32,
) -> LayoutPlan {
    let total_grid_rows = div_ceil(viewport_height, pitch);
    let cols = div_ceil(viewport_width, pitch);
    let rows_per_block = GLYPH_HEIGHT as u32 + row_spacing;
    let rows_per_page = ((total_grid_rows / rows_per_block) as usize).max(1);
    let total_pages = row_count.div_ceil(rows_per_page).max(1);
    LayoutPlan {
        rows_per_page,
        total_pages,
        cols,
        total_grid_rows,
        row_spacing,
    }
}

/// First grid row of the visible block, negative when it overflows.
pub fn start_grid_row(visible_rows: usize, total_grid_rows: u32, row_spacing: u32) -> i64 {
    let n = visible_rows as i64;
    let content_rows = n * GLYPH_HEIGHT as i64 + (n - 1).max(0) * row_spacing as i64;
    let unused = total_grid_rows as i64 - content_rows;
    unused.div_euclid(2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub last_page_switch: u64,
    pub rows_per_page: usize,
    pub total_pages: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 0,
            last_page_switch: 0,
            rows_per_page: 1,
            total_pages: 1,
        }
    }
}

impl PageState {
    pub fn new(now: u64) -> Self {
        Self {
            last_page_switch: now,
            ..Self::default()
        }
    }

    /// Takes the derived page counts of a fresh plan, a page index left
    /// out of range by a shrink goes back to 0.
    pub fn apply_plan(&mut self, plan: &LayoutPlan) {
        let mut next = *self;
        next.rows_per_page = plan.rows_per_page;
        next.total_pages = plan.total_pages.max(1);
        if next.current_page >= next.total_pages {
            debug!(
                "page {} out of range after replan ({} pages), reset",
                next.current_page, next.total_pages
            );
            next.current_page = 0;
        }
        *self = next;
    }

    /// Time-gated page rotation, returns true when the page changed.
    pub fn tick(&mut self, now: u64, page_interval: u64) -> bool {
        if self.total_pages <= 1 {
            self.current_page = 0;
            return false;
        }
        if self.current_page >= self.total_pages {
            self.current_page = 0;
        }
        if now.saturating_sub(self.last_page_switch) > page_interval {
            self.advance(now);
            return true;
        }
        false
    }

    /// Moves to the next page right away and restarts the interval.
    pub fn advance(&mut self, now: u64) {
        let pages = self.total_pages.max(1);
        self.current_page = (self.current_page + 1) % pages;
        self.last_page_switch = now;
        debug!("page -> {}/{}", self.current_page + 1, pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fifty_rows_spacing_two() {
        // 250px high at pitch 5 -> 50 grid rows
        let p = plan(250, 400, 5, 12, 2);
        assert_eq!(p.total_grid_rows, 50);
        assert_eq!(p.cols, 80);
        assert_eq!(p.rows_per_block(), 9);
        assert_eq!(p.rows_per_page, 5);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.page_rows(2, 12), 10..12);
    }

    #[test]
    fn grid_rounds_up() {
        let p = plan(251, 401, 5, 1, 0);
        assert_eq!(p.total_grid_rows, 51);
        assert_eq!(p.cols, 81);
    }

    #[test]
    fn tiny_viewport_keeps_one_row_per_page() {
        let p = plan(10, 10, 5, 4, 2);
        assert_eq!(p.rows_per_page, 1);
        assert_eq!(p.total_pages, 4);
        let p = plan(0, 0, 0, 0, 2);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.cols, 0);
    }

    #[test]
    fn centering() {
        // 2 rows, spacing 2: 7 + 2 + 7 = 16 rows in 50 -> start 17
        assert_eq!(start_grid_row(2, 50, 2), 17);
        assert_eq!(start_grid_row(1, 7, 2), 0);
        // overflow goes negative instead of failing
        assert_eq!(start_grid_row(3, 10, 2), -8);
        assert_eq!(start_grid_row(0, 10, 2), 5);
    }

    #[test]
    fn single_page_never_switches() {
        let mut ps = PageState::new(0);
        ps.apply_plan(&plan(250, 400, 5, 3, 2));
        for t in [0, 20_000, 40_000, 100_000] {
            assert!(!ps.tick(t, 1000));
            assert_eq!(ps.current_page, 0);
        }
    }

    #[test]
    fn pages_rotate_after_interval() {
        let mut ps = PageState::new(0);
        ps.apply_plan(&plan(250, 400, 5, 12, 2));
        assert!(!ps.tick(1000, 1000));
        assert!(ps.tick(1001, 1000));
        assert_eq!(ps.current_page, 1);
        assert_eq!(ps.last_page_switch, 1001);
        assert!(ps.tick(2002, 1000));
        assert!(ps.tick(3003, 1000));
        assert_eq!(ps.current_page, 0);
    }

    #[test]
    fn shrink_resets_dangling_page() {
        let mut ps = PageState::new(0);
        ps.apply_plan(&plan(250, 400, 5, 12, 2));
        ps.current_page = 2;
        // grown viewport: everything fits on one page
        ps.apply_plan(&plan(2000, 400, 5, 12, 2));
        assert_eq!(ps.total_pages, 1);
        assert_eq!(ps.current_page, 0);
    }

    proptest! {
        #[test]
        fn page_index_always_in_range(
            h in 0u32..2000,
            pitch in 1u32..12,
            rows in 0usize..40,
            spacing in 0u32..6,
            start_page in 0usize..50,
            now in 0u64..1_000_000,
        ) {
            let p = plan(h, 100, pitch, rows, spacing);
            prop_assert!(p.rows_per_page >= 1);
            prop_assert!(p.total_pages >= 1);
            prop_assert!(p.rows_per_page * p.total_pages >= rows);
            let mut ps = PageState { current_page: start_page, ..PageState::default() };
            ps.apply_plan(&p);
            ps.tick(now, 500);
            prop_assert!(ps.current_page < ps.total_pages);
        }
    }
}
