//! Rectangles in logical and physical coordinates
use core::cmp;
use core::ops::RangeInclusive;

use crate::gram::{COLUMNS, ROWS};

/// An inclusive rectangle in logical (device orientation) coordinates
///
/// The argument order of [`Area::new`] follows the drawing API:
/// `x_start, x_end, y_start, y_end`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Area {
    /// First column
    pub x_start: u16,
    /// Last column, inclusive
    pub x_end: u16,
    /// First row
    pub y_start: u16,
    /// Last row, inclusive
    pub y_end: u16,
}

impl Area {
    /// Construct a new rectangle
    pub const fn new(x_start: u16, x_end: u16, y_start: u16, y_end: u16) -> Area {
        Area {
            x_start,
            x_end,
            y_start,
            y_end,
        }
    }

    /// Test whether the rectangle covers no pixel
    pub fn is_empty(&self) -> bool {
        self.x_start > self.x_end || self.y_start > self.y_end
    }

    /// Number of pixels per row
    pub fn width(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.x_end - self.x_start) as usize + 1
        }
    }

    /// Pull every coordinate that lies at or past `width`/`height` back to the last pixel
    pub fn clamp(&self, width: u16, height: u16) -> Area {
        let max_x = width.saturating_sub(1);
        let max_y = height.saturating_sub(1);
        Area {
            x_start: cmp::min(self.x_start, max_x),
            x_end: cmp::min(self.x_end, max_x),
            y_start: cmp::min(self.y_start, max_y),
            y_end: cmp::min(self.y_end, max_y),
        }
    }
}

/// The part of the shadow memory a refresh pushes, in physical (landscape) pixels
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RefreshRegion {
    /// First column
    pub start_column: u16,
    /// Last column, inclusive
    pub end_column: u16,
    /// First physical pixel row
    pub start_row: u16,
    /// Last physical pixel row, inclusive
    pub end_row: u16,
}

impl RefreshRegion {
    /// Construct a new region
    pub const fn new(start_column: u16, end_column: u16, start_row: u16, end_row: u16) -> Self {
        RefreshRegion {
            start_column,
            end_column,
            start_row,
            end_row,
        }
    }

    /// The whole shadow memory
    pub const fn full() -> Self {
        RefreshRegion::new(0, COLUMNS as u16 - 1, 0, ROWS as u16 - 1)
    }

    /// Grow the region so it covers the physical pixel `(column, row)` too
    pub fn include(self, column: u16, row: u16) -> Self {
        RefreshRegion {
            start_column: cmp::min(self.start_column, column),
            end_column: cmp::max(self.end_column, column),
            start_row: cmp::min(self.start_row, row),
            end_row: cmp::max(self.end_row, row),
        }
    }

    /// Pages touched by the row range
    pub fn pages(&self) -> RangeInclusive<usize> {
        (self.start_row as usize / 8)..=(self.end_row as usize / 8)
    }

    /// Columns touched
    pub fn columns(&self) -> RangeInclusive<usize> {
        self.start_column as usize..=self.end_column as usize
    }
}

#[test]
fn test_clamp() {
    let area = Area::new(10, 200, 5, 64).clamp(128, 64);
    assert_eq!(area, Area::new(10, 127, 5, 63));

    let area = Area::new(130, 140, 70, 80).clamp(128, 64);
    assert_eq!(area, Area::new(127, 127, 63, 63));
}

#[test]
fn test_width_and_empty() {
    assert_eq!(Area::new(0, 127, 0, 0).width(), 128);
    assert_eq!(Area::new(4, 4, 9, 9).width(), 1);
    assert!(Area::new(5, 4, 0, 0).is_empty());
    assert!(Area::new(0, 4, 3, 2).is_empty());
    assert_eq!(Area::new(5, 4, 0, 0).width(), 0);
}

#[test]
fn test_region_pages() {
    assert_eq!(RefreshRegion::new(0, 127, 0, 7).pages(), 0..=0);
    assert_eq!(RefreshRegion::new(0, 127, 7, 8).pages(), 0..=1);
    assert_eq!(RefreshRegion::full().pages(), 0..=7);
    assert_eq!(RefreshRegion::full().columns(), 0..=127);
}

#[test]
fn test_region_include() {
    let region = RefreshRegion::new(5, 5, 9, 9).include(2, 30).include(7, 1);
    assert_eq!(region, RefreshRegion::new(2, 7, 1, 30));
}
