use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::interface::LcdBus;
use crate::orientation::ScanDirection;
use crate::rect::Area;

/// All commands need to have this trait which gives the byte that is sent
/// with the DC pin in command mode
pub(crate) trait Command: Copy {
    fn address(self) -> u8;
}

/// One entry of a controller command table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    /// Send a single control byte
    Cmd(u8),
    /// Wait before sending the next byte
    DelayMs(u32),
}

/// The parts that differ between controller families: identity and the
/// literal command tables for setup and power switching.
///
/// Everything else (addressing, shadow memory, refresh) is shared.
pub trait Controller: Sync {
    /// Numeric controller id the framework binds devices with
    fn id(&self) -> u16;

    /// Human readable controller name, used in log output
    fn name(&self) -> &'static str;

    /// Commands played once after the bus was reset
    fn init_sequence(&self) -> &'static [InitStep];

    /// Commands to switch the panel on or off
    fn power_sequence(&self, on: bool) -> &'static [InitStep];
}

/// The operation set every display driver offers to the framework
///
/// Coordinates are logical, i.e. in the orientation the device was described
/// with. Rectangles are inclusive on both ends.
pub trait LcdDriver<BUS: LcdBus> {
    /// Resets the bus, plays the controller init table and clears the panel
    fn init<DELAY: DelayNs>(&mut self, delay: &mut DELAY) -> Result<(), crate::Error<BUS::Error>>;

    /// Set one pixel and push the byte holding it to the panel
    ///
    /// Fails with [`OutOfBounds`](crate::Error::OutOfBounds) outside the device area.
    fn draw_point(&mut self, x: u16, y: u16, color: Color) -> Result<(), crate::Error<BUS::Error>>;

    /// Fill a rectangle with one color
    ///
    /// Coordinates past the device edge are clamped, never rejected.
    fn region_fill(&mut self, area: Area, color: Color) -> Result<(), crate::Error<BUS::Error>>;

    /// Fill a rectangle with one color per pixel, read row-major from `colors`
    ///
    /// Coordinates past the device edge are clamped, never rejected.
    fn bulk_fill<C>(&mut self, area: Area, colors: &[C]) -> Result<(), crate::Error<BUS::Error>>
    where
        C: Copy + Into<Color>;

    /// Switch the panel on or off
    fn power(&mut self, on: bool) -> Result<(), crate::Error<BUS::Error>>;

    /// Staging hook before a frame is drawn. These panels draw directly, so it does nothing.
    fn prepare_display(&mut self, _area: Area) -> Result<(), crate::Error<BUS::Error>> {
        Ok(())
    }

    /// Scan direction is fixed by the device description for this family, so it does nothing.
    fn set_scan_direction(
        &mut self,
        _direction: ScanDirection,
    ) -> Result<(), crate::Error<BUS::Error>> {
        Ok(())
    }

    /// Switch the backlight through the bus's dedicated line
    fn backlight(&mut self, on: bool) -> Result<(), crate::Error<BUS::Error>>;
}
