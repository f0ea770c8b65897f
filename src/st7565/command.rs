//! SPI Commands for the ST7565 COG LCD controller

use crate::traits::{self, InitStep};

/// ST7565 setup commands
///
/// For more infos about the addresses and what they are doing look into the datasheet
#[allow(dead_code)]
#[derive(Copy, Clone)]
pub(crate) enum Command {
    DisplayOff = 0xAE,
    DisplayOn = 0xAF,
    /// Display start line 0, `0x40 | line`
    StartLine = 0x40,
    /// SEG output normal, column 0 on the left
    SegNormal = 0xA0,
    SegReverse = 0xA1,
    /// LCD bias 1/9
    Bias9 = 0xA2,
    Bias7 = 0xA3,
    AllPixelsNormal = 0xA4,
    NormalDisplay = 0xA6,
    /// COM output normal, row 0 on top
    ComNormal = 0xC0,
    /// COM output reversed, row 0 at the bottom of the glass
    ComReverse = 0xC8,
    SoftReset = 0xE2,
    /// Power control, booster only
    BoosterOn = 0x2C,
    /// Power control, booster and regulator
    RegulatorOn = 0x2E,
    /// Power control, booster, regulator and follower
    FollowerOn = 0x2F,
    /// Regulator resistor ratio, coarse contrast (0x20..=0x27)
    ResistorRatio4 = 0x24,
    /// Electronic volume, followed by the fine contrast byte (0x00..=0x3F)
    ElectronicVolume = 0x81,
}

impl Command {
    pub(crate) const fn step(self) -> InitStep {
        InitStep::Cmd(self as u8)
    }
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        self as u8
    }
}
