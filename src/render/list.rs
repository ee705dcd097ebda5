//! Fixed-size row list
//!
//! Layout math for the virtualized savings table: every row has the same
//! height, so the rows visible at a scroll offset are a simple index range.
//! Only that range (plus an overscan margin) is rendered, positioned
//! absolutely inside a spacer of the full list height.

use std::ops::Range;

/// Viewport and row geometry, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSizeList {
    /// Visible height of the scroll container
    pub height: u32,
    /// Height of every row
    pub item_size: u32,
    /// Extra rows rendered on each side of the visible window
    pub overscan: usize,
}

impl Default for FixedSizeList {
    fn default() -> Self {
        Self {
            height: 600,
            item_size: 140,
            overscan: 5,
        }
    }
}

impl FixedSizeList {
    pub fn new(height: u32, item_size: u32, overscan: usize) -> Self {
        Self {
            height,
            item_size: item_size.max(1),
            overscan,
        }
    }

    /// Height of the spacer holding all `count` rows
    pub fn inner_height(&self, count: usize) -> u64 {
        count as u64 * self.item_size as u64
    }

    /// Top offset of the row at `index`
    pub fn row_top(&self, index: usize) -> u64 {
        index as u64 * self.item_size as u64
    }

    /// Largest useful scroll offset for `count` rows
    pub fn max_offset(&self, count: usize) -> u64 {
        self.inner_height(count).saturating_sub(self.height as u64)
    }

    /// Rows to render when scrolled to `offset`
    pub fn visible_range(&self, offset: u64, count: usize) -> Range<usize> {
        if count == 0 {
            return 0..0;
        }

        let offset = offset.min(self.max_offset(count));
        let item = self.item_size as u64;

        let first = (offset / item) as usize;
        let last = (offset + self.height as u64).div_ceil(item) as usize;

        let start = first.saturating_sub(self.overscan);
        let end = last.saturating_add(self.overscan).min(count);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let list = FixedSizeList::default();
        assert_eq!(list.height, 600);
        assert_eq!(list.item_size, 140);
        assert_eq!(list.overscan, 5);
    }

    #[test]
    fn test_empty_list() {
        let list = FixedSizeList::default();
        assert_eq!(list.visible_range(0, 0), 0..0);
        assert_eq!(list.inner_height(0), 0);
    }

    #[test]
    fn test_short_list_renders_everything() {
        let list = FixedSizeList::default();
        assert_eq!(list.visible_range(0, 3), 0..3);
        assert_eq!(list.visible_range(10_000, 3), 0..3);
    }

    #[test]
    fn test_window_at_top() {
        let list = FixedSizeList::default();
        // 600 / 140 rounds up to 5 visible rows, plus 5 overscan
        assert_eq!(list.visible_range(0, 100), 0..10);
    }

    #[test]
    fn test_window_scrolled() {
        let list = FixedSizeList::default();
        // offset 1400 -> rows 10..15 visible
        assert_eq!(list.visible_range(1400, 100), 5..20);
    }

    #[test]
    fn test_window_clamped_to_end() {
        let list = FixedSizeList::default();
        let range = list.visible_range(u64::MAX, 13);
        assert_eq!(range.end, 13);
        assert_eq!(list.max_offset(13), 13 * 140 - 600);
        assert_eq!(range.start, (list.max_offset(13) / 140) as usize - 5);
    }

    #[test]
    fn test_row_top() {
        let list = FixedSizeList::new(300, 50, 0);
        assert_eq!(list.row_top(0), 0);
        assert_eq!(list.row_top(4), 200);
        assert_eq!(list.visible_range(75, 20), 1..8);
    }
}
