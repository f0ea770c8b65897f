//! A Driver for ST7565 based 128x64 / 128x32 COG LCDs
//!
//! The drawing logic lives in [`CogLcd`](crate::driver::CogLcd), this module only
//! carries the controller's command tables.
//!
//! # References
//!
//! - [ST7565 datasheet](https://www.lcd-module.de/eng/pdf/zubehoer/st7565r.pdf)
//!
//! # Examples
//!
//!```rust, no_run
//!# use embedded_hal_mock::eh1::*;
//!# fn main() -> Result<(), cog_lcd::Error<cog_lcd::interface::InterfaceError>> {
//!use cog_lcd::{prelude::*, st7565::St7565};
//!#
//!# let spi = spi::Mock::new(&[]);
//!# let dc = digital::Mock::new(&[]);
//!# let rst = digital::Mock::new(&[]);
//!# let cs = digital::Mock::new(&[]);
//!# let bl = digital::Mock::new(&[]);
//!# let mut delay = delay::NoopDelay::new();
//!
//!let bus = SpiInterface::new(spi, dc, rst, cs, Some(bl), None);
//!let info = DeviceInfo::new(128, 64, Orientation::Landscape).unwrap();
//!let mut lcd = CogLcd::new(bus, info, &St7565);
//!lcd.init(&mut delay)?;
//!
//!lcd.region_fill(Area::new(0, 127, 0, 7), Color::Black)?;
//!lcd.draw_point(10, 20, Color::Black)?;
//!lcd.backlight(true)?;
//!# Ok(())
//!# }
//!```

pub(crate) mod command;
use self::command::Command;

use crate::registry::ControllerId;
use crate::traits::{Controller, InitStep};

/// Width of the 128x64 panel
pub const WIDTH: u16 = 128;
/// Height of the 128x64 panel
pub const HEIGHT: u16 = 64;
/// Height of the smaller panel bound through [`St7564`]
pub const HEIGHT_SMALL: u16 = 32;

/// Coarse contrast, regulator resistor ratio 4
const CONTRAST_COARSE: Command = Command::ResistorRatio4;
/// Fine contrast byte following [`Command::ElectronicVolume`]
const CONTRAST_FINE: u8 = 0x25;
/// Time the charge pump needs between the power control steps
const POWER_STEP_DELAY_MS: u32 = 50;

/// Soft reset, power up the booster/regulator/follower step by step,
/// then contrast, bias and scan directions.
const INIT_SEQUENCE: &[InitStep] = &[
    Command::SoftReset.step(),
    InitStep::DelayMs(POWER_STEP_DELAY_MS),
    Command::BoosterOn.step(),
    InitStep::DelayMs(POWER_STEP_DELAY_MS),
    Command::RegulatorOn.step(),
    InitStep::DelayMs(POWER_STEP_DELAY_MS),
    Command::FollowerOn.step(),
    InitStep::DelayMs(POWER_STEP_DELAY_MS),
    CONTRAST_COARSE.step(),
    Command::ElectronicVolume.step(),
    InitStep::Cmd(CONTRAST_FINE),
    Command::Bias9.step(),
    Command::ComReverse.step(),
    Command::SegNormal.step(),
    Command::StartLine.step(),
    Command::DisplayOn.step(),
];

const POWER_ON: &[InitStep] = &[Command::DisplayOn.step()];
const POWER_OFF: &[InitStep] = &[Command::DisplayOff.step()];

/// ST7565 128x64 COG LCD, controller id `0x7565`
#[derive(Debug, Clone, Copy, Default)]
pub struct St7565;

impl Controller for St7565 {
    fn id(&self) -> u16 {
        ControllerId::St7565 as u16
    }

    fn name(&self) -> &'static str {
        "ST7565"
    }

    fn init_sequence(&self) -> &'static [InitStep] {
        INIT_SEQUENCE
    }

    fn power_sequence(&self, on: bool) -> &'static [InitStep] {
        if on {
            POWER_ON
        } else {
            POWER_OFF
        }
    }
}

/// Second identity of the ST7565, controller id `0x7564`.
///
/// Lets a board carry a 128x64 and a 128x32 panel at the same time while
/// device ids double as controller ids. Behaves exactly like [`St7565`].
#[derive(Debug, Clone, Copy, Default)]
pub struct St7564;

impl Controller for St7564 {
    fn id(&self) -> u16 {
        ControllerId::St7564 as u16
    }

    fn name(&self) -> &'static str {
        "ST7565 (0x7564)"
    }

    fn init_sequence(&self) -> &'static [InitStep] {
        St7565.init_sequence()
    }

    fn power_sequence(&self, on: bool) -> &'static [InitStep] {
        St7565.power_sequence(on)
    }
}
