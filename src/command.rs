//! Page addressing commands, identical on the ST7565 and the SSD1315

use crate::interface::LcdBus;
use crate::traits;

/// Commands that select where the next data burst lands in controller RAM
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// `0xB0 + page`, page 0..=7
    SetPageAddress(u8),
    /// `0x10 + (column >> 4)`
    SetColumnHigh(u8),
    /// `0x00 + (column & 0x0F)`
    SetColumnLow(u8),
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        match self {
            Command::SetPageAddress(page) => 0xB0 + (page & 0x0F),
            Command::SetColumnHigh(column) => 0x10 + ((column >> 4) & 0x0F),
            Command::SetColumnLow(column) => column & 0x0F,
        }
    }
}

/// Sends a [Command](traits::Command) as a control byte
pub(crate) fn send<B: LcdBus, C: traits::Command>(bus: &mut B, command: C) -> Result<(), B::Error> {
    bus.write_command(command.address())
}
