//! Device description and the logical to physical coordinate mapping
//!
//! The controllers always address their RAM in landscape. A portrait device
//! is the same panel turned on its side, so its coordinates get swapped
//! before they reach the shadow memory.

use crate::gram::{COLUMNS, ROWS};
use crate::rect::{Area, RefreshRegion};

/// How the panel is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Logical axes are the controller axes
    #[default]
    Landscape,
    /// Logical x runs along the controller rows
    Portrait,
}

/// Framework scan direction request, ignored by this controller family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanDirection {
    /// Left to right, top to bottom
    #[default]
    LeftRightTopBottom,
    /// Right to left, top to bottom
    RightLeftTopBottom,
    /// Left to right, bottom to top
    LeftRightBottomTop,
    /// Right to left, bottom to top
    RightLeftBottomTop,
}

/// The geometry the framework describes a device with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInfo {
    width: u16,
    height: u16,
    orientation: Orientation,
}

impl DeviceInfo {
    /// Describes a device of `width` × `height` logical pixels.
    ///
    /// Returns `None` if the panel does not fit into the 128×64 shadow memory
    /// once turned to landscape.
    pub const fn new(width: u16, height: u16, orientation: Orientation) -> Option<Self> {
        let (columns, rows) = match orientation {
            Orientation::Landscape => (width, height),
            Orientation::Portrait => (height, width),
        };
        if width == 0 || height == 0 || columns as usize > COLUMNS || rows as usize > ROWS {
            return None;
        }
        Some(DeviceInfo {
            width,
            height,
            orientation,
        })
    }

    /// Logical width
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Mounting orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The whole logical area
    pub fn area(&self) -> Area {
        Area::new(0, self.width - 1, 0, self.height - 1)
    }

    /// Physical pixel of a single point write, `None` outside the device.
    ///
    /// Portrait swaps the axes without mirroring.
    pub(crate) fn point_to_physical(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(match self.orientation {
            Orientation::Landscape => (x, y),
            Orientation::Portrait => (y, x),
        })
    }

    /// Physical pixel of a rectangle fill.
    ///
    /// Portrait swaps the axes and mirrors logical x, which turns the image by
    /// 90° instead of transposing it. This differs from
    /// [`point_to_physical`](Self::point_to_physical) on purpose.
    /// `(x, y)` must already be clamped to the device.
    pub(crate) fn fill_to_physical(&self, x: u16, y: u16) -> (u16, u16) {
        match self.orientation {
            Orientation::Landscape => (x, y),
            Orientation::Portrait => (y, self.width - 1 - x),
        }
    }

    /// The physical region a clamped fill rectangle touched
    pub(crate) fn fill_region(&self, area: &Area) -> RefreshRegion {
        match self.orientation {
            Orientation::Landscape => {
                RefreshRegion::new(area.x_start, area.x_end, area.y_start, area.y_end)
            }
            Orientation::Portrait => RefreshRegion::new(
                area.y_start,
                area.y_end,
                self.width - 1 - area.x_end,
                self.width - 1 - area.x_start,
            ),
        }
    }
}
