//! Graphics Support for the page-addressed panels
//!
//! [`CogLcd`] draws straight to the panel: every `draw` call updates the
//! shadow memory and then refreshes the pages it touched once.
//!
//! Pixels go through the single point mapping, so shapes keep their layout in
//! portrait mode. Pixels outside the display are skipped.
//!
//! Solid rectangles become one [`region_fill`](LcdDriver::region_fill) in
//! landscape, where both mappings agree. In portrait they are drawn pixel by
//! pixel like everything else.

use embedded_graphics_core::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use crate::driver::CogLcd;
use crate::error::Error;
use crate::interface::LcdBus;
use crate::orientation::Orientation;
use crate::rect::{Area, RefreshRegion};
use crate::traits::LcdDriver;

/// For use with embedded_grahics
impl<BUS> DrawTarget for CogLcd<BUS>
where
    BUS: LcdBus,
{
    type Color = BinaryColor;
    type Error = Error<BUS::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let mut dirty: Option<RefreshRegion> = None;

        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            let Some((px, py)) = self.info().point_to_physical(x, y) else {
                continue;
            };
            self.set_physical(px, py, color.into());
            dirty = Some(match dirty {
                Some(region) => region.include(px, py),
                None => RefreshRegion::new(px, px, py, py),
            });
        }

        match dirty {
            Some(region) => self.refresh(region).map_err(Error::Bus),
            None => Ok(()),
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        if self.info().orientation() == Orientation::Portrait {
            let pixels = area
                .rows()
                .flat_map(move |y| area.columns().map(move |x| Pixel(Point::new(x, y), color)));
            return self.draw_iter(pixels);
        }

        let top_left = area.top_left;
        let area = Area::new(
            top_left.x as u16,
            bottom_right.x as u16,
            top_left.y as u16,
            bottom_right.y as u16,
        );
        self.region_fill(area, color.into())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let area = self.info().area();
        self.region_fill(area, color.into())
    }
}

/// For use with embedded_grahics
impl<BUS> OriginDimensions for CogLcd<BUS>
where
    BUS: LcdBus,
{
    fn size(&self) -> Size {
        Size::new(self.info().width() as u32, self.info().height() as u32)
    }
}
