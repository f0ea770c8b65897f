//! A Driver for SSD1315 (and the compatible SSD1615) 128x64 monochrome OLEDs
//!
//! Addressing and drawing are the same as on the ST7565 COG LCDs, only the
//! setup and the power switching differ. The charge pump is switched together
//! with the panel in [`power`](crate::LcdDriver::power).
//!
//! OLEDs have no backlight, build the [`SpiInterface`](crate::interface::SpiInterface)
//! without one.

pub(crate) mod command;
use self::command::{Command, CHARGE_PUMP_OFF, CHARGE_PUMP_ON, PAGE_ADDRESSING};

use crate::registry::ControllerId;
use crate::traits::{Controller, InitStep};

/// Width of the display
pub const WIDTH: u16 = 128;
/// Height of the display
pub const HEIGHT: u16 = 64;

#[rustfmt::skip]
const INIT_SEQUENCE: &[InitStep] = &[
    Command::DisplayOff.step(),
    Command::SetLowColumn.step(),
    Command::SetHighColumn.step(),
    Command::StartLine.step(),
    Command::Contrast.step(),           InitStep::Cmd(0xCF),
    Command::SegRemap.step(),
    Command::ComScanDec.step(),
    Command::NormalDisplay.step(),
    Command::Multiplex.step(),          InitStep::Cmd(0x3F), // 1/64 duty
    Command::DisplayOffset.step(),      InitStep::Cmd(0x00),
    Command::ClockDivide.step(),        InitStep::Cmd(0x80), // 100 frames/s
    Command::Precharge.step(),          InitStep::Cmd(0xF1), // 15 clocks precharge, 1 discharge
    Command::ComPins.step(),            InitStep::Cmd(0x12),
    Command::VcomDeselect.step(),       InitStep::Cmd(0x40),
    Command::MemoryMode.step(),         InitStep::Cmd(PAGE_ADDRESSING),
    Command::ChargePump.step(),         InitStep::Cmd(CHARGE_PUMP_ON),
    Command::EntireDisplayResume.step(),
    Command::NormalDisplay.step(),
    Command::DisplayOn.step(),
    Command::DisplayOn.step(),
];

const POWER_ON: &[InitStep] = &[
    Command::ChargePump.step(),
    InitStep::Cmd(CHARGE_PUMP_ON),
    Command::DisplayOn.step(),
];

const POWER_OFF: &[InitStep] = &[
    Command::ChargePump.step(),
    InitStep::Cmd(CHARGE_PUMP_OFF),
    Command::DisplayOff.step(),
];

/// SSD1315 OLED, controller id `0x1315`
#[derive(Debug, Clone, Copy, Default)]
pub struct Ssd1315;

impl Controller for Ssd1315 {
    fn id(&self) -> u16 {
        ControllerId::Ssd1315 as u16
    }

    fn name(&self) -> &'static str {
        "SSD1315"
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
