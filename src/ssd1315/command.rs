//! SPI Commands for the SSD1315 OLED controller

use crate::traits::{self, InitStep};

/// SSD1315 setup commands, most of them take one parameter byte
#[allow(dead_code)]
#[derive(Copy, Clone)]
pub(crate) enum Command {
    /// Page addressing mode column, low nibble
    SetLowColumn = 0x00,
    /// Page addressing mode column, high nibble
    SetHighColumn = 0x10,
    /// Memory addressing mode, followed by 0x00/0x01/0x02
    MemoryMode = 0x20,
    /// Display start line 0, `0x40 | line`
    StartLine = 0x40,
    Contrast = 0x81,
    /// Charge pump, followed by 0x14 (on) or 0x10 (off)
    ChargePump = 0x8D,
    /// Column 127 mapped to SEG0
    SegRemap = 0xA1,
    /// Output follows RAM content
    EntireDisplayResume = 0xA4,
    NormalDisplay = 0xA6,
    InvertDisplay = 0xA7,
    Multiplex = 0xA8,
    DisplayOff = 0xAE,
    DisplayOn = 0xAF,
    /// Scan from COM[N-1] to COM0
    ComScanDec = 0xC8,
    DisplayOffset = 0xD3,
    ClockDivide = 0xD5,
    Precharge = 0xD9,
    ComPins = 0xDA,
    VcomDeselect = 0xDB,
}

/// Parameter for [`Command::ChargePump`]
pub(crate) const CHARGE_PUMP_ON: u8 = 0x14;
/// Parameter for [`Command::ChargePump`]
pub(crate) const CHARGE_PUMP_OFF: u8 = 0x10;
/// Parameter for [`Command::MemoryMode`]
pub(crate) const PAGE_ADDRESSING: u8 = 0x02;

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
