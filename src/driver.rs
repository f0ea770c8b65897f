//! The drawing logic shared by all page-addressed controllers
//!
//! [`CogLcd`] keeps a [`Gram`] shadow of the panel. Every drawing call updates
//! the shadow first and then pushes only the pages and columns it touched,
//! one bus session per page.

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{self, Command};
use crate::error::Error;
use crate::gram::Gram;
use crate::interface::{session, LcdBus};
use crate::orientation::DeviceInfo;
use crate::rect::{Area, RefreshRegion};
use crate::registry;
use crate::traits::{Controller, InitStep, LcdDriver};

/// Driver for one page-addressed monochrome panel
///
/// The controller strategy only decides which command tables are sent on
/// init and power switching; all drawing goes through the same code.
pub struct CogLcd<BUS> {
    bus: BUS,
    info: DeviceInfo,
    controller: &'static dyn Controller,
    gram: Gram,
}

impl<BUS> CogLcd<BUS>
where
    BUS: LcdBus,
{
    /// Binds a bus and a device description to a controller.
    ///
    /// Nothing is sent yet, call [`init`](LcdDriver::init) before drawing.
    pub fn new(bus: BUS, info: DeviceInfo, controller: &'static dyn Controller) -> Self {
        CogLcd {
            bus,
            info,
            controller,
            gram: Gram::new(),
        }
    }

    /// Same as [`new`](Self::new) with the controller looked up by its numeric id.
    ///
    /// Hands the bus back if no controller is registered for `id`.
    pub fn with_id(bus: BUS, info: DeviceInfo, id: u16) -> Result<Self, BUS> {
        match registry::find(id) {
            Some(controller) => Ok(Self::new(bus, info, controller)),
            None => Err(bus),
        }
    }

    /// The shadow of the panel content, in physical coordinates
    pub fn gram(&self) -> &Gram {
        &self.gram
    }

    /// The device description the driver was built with
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Numeric id of the bound controller
    pub fn controller_id(&self) -> u16 {
        self.controller.id()
    }

    /// Gives back the bus, dropping the shadow memory
    pub fn release(self) -> BUS {
        self.bus
    }

    /// Push the whole shadow to the panel again
    pub fn refresh_all(&mut self) -> Result<(), Error<BUS::Error>> {
        self.refresh(RefreshRegion::full()).map_err(Error::Bus)
    }

    /// Push a physical region of the shadow, one session per page
    pub(crate) fn refresh(&mut self, region: RefreshRegion) -> Result<(), BUS::Error> {
        log::debug!(
            "refresh columns {}..={} rows {}..={}",
            region.start_column,
            region.end_column,
            region.start_row,
            region.end_row
        );
        let CogLcd { bus, gram, .. } = self;
        let column = region.start_column as u8;

        for page in region.pages() {
            let run = gram.run(page, region.columns());
            session(bus, |bus| {
                command::send(bus, Command::SetPageAddress(page as u8))?;
                command::send(bus, Command::SetColumnHigh(column))?;
                command::send(bus, Command::SetColumnLow(column))?;
                bus.write_data(run)
            })?;
        }
        Ok(())
    }

    /// Set a physical pixel in the shadow without touching the bus
    #[cfg(any(test, feature = "graphics"))]
    pub(crate) fn set_physical(&mut self, px: u16, py: u16, color: Color) {
        self.gram.set_pixel(px, py, color);
    }

    /// Fill a clamped area pixel by pixel and refresh what it covered
    fn fill_with<F>(&mut self, area: Area, mut color_at: F) -> Result<(), Error<BUS::Error>>
    where
        F: FnMut(u16, u16) -> Option<Color>,
    {
        if area.is_empty() {
            return Ok(());
        }
        let clamped = area.clamp(self.info.width(), self.info.height());

        for y in clamped.y_start..=clamped.y_end {
            for x in clamped.x_start..=clamped.x_end {
                if let Some(color) = color_at(x - clamped.x_start, y - clamped.y_start) {
                    let (px, py) = self.info.fill_to_physical(x, y);
                    self.gram.set_pixel(px, py, color);
                }
            }
        }

        let region = self.info.fill_region(&clamped);
        self.refresh(region).map_err(Error::Bus)
    }
}

/// Plays a command table inside one bus session
fn play<BUS, DELAY>(bus: &mut BUS, steps: &[InitStep], delay: &mut DELAY) -> Result<(), BUS::Error>
where
    BUS: LcdBus,
    DELAY: DelayNs,
{
    session(bus, |bus| {
        for step in steps {
            match *step {
                InitStep::Cmd(byte) => bus.write_command(byte)?,
                InitStep::DelayMs(ms) => delay.delay_ms(ms),
            }
        }
        Ok(())
    })
}

/// Power tables switch the panel without waiting
struct NoWait;

impl DelayNs for NoWait {
    fn delay_ns(&mut self, _ns: u32) {}
}

impl<BUS> LcdDriver<BUS> for CogLcd<BUS>
where
    BUS: LcdBus,
{
    fn init<DELAY: DelayNs>(&mut self, delay: &mut DELAY) -> Result<(), Error<BUS::Error>> {
        self.bus.init(delay).map_err(Error::Bus)?;
        play(&mut self.bus, self.controller.init_sequence(), delay).map_err(Error::Bus)?;
        log::info!("{} init finish", self.controller.name());

        self.gram.fill(Color::White);
        self.refresh_all()
    }

    fn draw_point(&mut self, x: u16, y: u16, color: Color) -> Result<(), Error<BUS::Error>> {
        let Some((px, py)) = self.info.point_to_physical(x, y) else {
            log::warn!(
                "point ({}, {}) outside {}x{}",
                x,
                y,
                self.info.width(),
                self.info.height()
            );
            return Err(Error::OutOfBounds);
        };

        self.gram.set_pixel(px, py, color);
        // not efficient: a whole session for a single byte
        self.refresh(RefreshRegion::new(px, px, py, py)).map_err(Error::Bus)
    }

    fn region_fill(&mut self, area: Area, color: Color) -> Result<(), Error<BUS::Error>> {
        self.fill_with(area, |_, _| Some(color))
    }

    fn bulk_fill<C>(&mut self, area: Area, colors: &[C]) -> Result<(), Error<BUS::Error>>
    where
        C: Copy + Into<Color>,
    {
        // the caller lays out `colors` for the requested width, even if it gets clamped
        let stride = area.width();
        self.fill_with(area, |dx, dy| {
            colors
                .get(dy as usize * stride + dx as usize)
                .map(|&c| c.into())
        })
    }

    fn power(&mut self, on: bool) -> Result<(), Error<BUS::Error>> {
        play(&mut self.bus, self.controller.power_sequence(on), &mut NoWait).map_err(Error::Bus)
    }

    fn backlight(&mut self, on: bool) -> Result<(), Error<BUS::Error>> {
        self.bus.set_backlight(on).map_err(Error::Bus)
    }
}
