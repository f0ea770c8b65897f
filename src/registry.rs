//! Lookup of controller implementations by their numeric id
//!
//! The framework describes devices with a numeric controller id. [`find`]
//! turns that id into the controller strategy a [`CogLcd`](crate::driver::CogLcd)
//! is built with.

use crate::traits::Controller;

/// Every controller id this crate knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ControllerId {
    /// ST7565 COG LCD, 128x64
    St7565 = 0x7565,
    /// ST7565 COG LCD bound to a second panel size (128x32)
    St7564 = 0x7564,
    /// SSD1315 OLED
    Ssd1315 = 0x1315,
}

/// The id is not one of [`ControllerId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownController(pub u16);

impl TryFrom<u16> for ControllerId {
    type Error = UnknownController;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        match id {
            0x7565 => Ok(ControllerId::St7565),
            0x7564 => Ok(ControllerId::St7564),
            0x1315 => Ok(ControllerId::Ssd1315),
            other => Err(UnknownController(other)),
        }
    }
}

/// Returns the controller registered for `id`.
///
/// `None` for unknown ids and for controllers whose cargo feature is disabled.
pub fn find(id: u16) -> Option<&'static dyn Controller> {
    match ControllerId::try_from(id).ok()? {
        #[cfg(feature = "st7565")]
        ControllerId::St7565 => Some(&crate::st7565::St7565),
        #[cfg(feature = "st7565")]
        ControllerId::St7564 => Some(&crate::st7565::St7564),
        #[cfg(feature = "ssd1315")]
        ControllerId::Ssd1315 => Some(&crate::ssd1315::Ssd1315),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}
