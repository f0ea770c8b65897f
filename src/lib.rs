//! A simple Driver for page-addressed monochrome COG LCDs and OLEDs via SPI
//!
//! This driver was built using [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1.0.0
//!
//! Supported controllers:
//!
//! | Id       | Controller | Panel              |
//! | :------: | :--------- | :----------------- |
//! | `0x7565` | ST7565     | 128x64 COG LCD     |
//! | `0x7564` | ST7565     | 128x32 COG LCD     |
//! | `0x1315` | SSD1315    | 128x64 OLED        |
//!
//! # Requirements
//!
//! ### SPI
//!
//! - MISO is not connected/available
//! - SPI_MODE_0 is used (CPHL = 0, CPOL = 0)
//! - 8 bits per word, MSB first
//! - CS is driven by the [`SpiInterface`](interface::SpiInterface) itself, so
//!   it takes a raw [`SpiBus`](embedded_hal::spi::SpiBus)
//!
//! ### Memory layout
//!
//! The driver keeps a 128x64 shadow of the panel, 8 pages of 128 column bytes.
//! Bit `b` of a column byte is the pixel on row `page * 8 + b`. Every drawing
//! call writes the shadow and then refreshes only the pages and columns it
//! changed, so there is no separate "flush" step.
//!
//! # Examples
//!
//!```rust, no_run
//!# use embedded_hal_mock::eh1::*;
//!# fn main() -> Result<(), cog_lcd::Error<cog_lcd::interface::InterfaceError>> {
//!use cog_lcd::prelude::*;
//!#
//!# let spi = spi::Mock::new(&[]);
//!# let dc = digital::Mock::new(&[]);
//!# let rst = digital::Mock::new(&[]);
//!# let cs = digital::Mock::new(&[]);
//!# let mut delay = delay::NoopDelay::new();
//!
//!// an OLED has no backlight
//!let bus = SpiInterface::new(spi, dc, rst, cs, None::<digital::Mock>, None);
//!let info = DeviceInfo::new(64, 128, Orientation::Portrait).unwrap();
//!
//!// bind the driver by controller id, like the board description does
//!let mut oled = CogLcd::with_id(bus, info, 0x1315).ok().unwrap();
//!oled.init(&mut delay)?;
//!
//!oled.bulk_fill(Area::new(0, 1, 0, 1), &[0x0000u16, 0xFFFF, 0xFFFF, 0x0000])?;
//!oled.power(false)?;
//!# Ok(())
//!# }
//!```
#![no_std]

#[cfg(feature = "graphics")]
pub mod graphics;

mod traits;

pub mod color;

mod error;
pub use error::Error;

/// Interface for the physical connection between display and the controlling device
pub mod interface;

pub(crate) mod command;

pub mod driver;
pub mod gram;
pub mod orientation;
pub mod rect;
pub mod registry;

#[cfg(feature = "st7565")]
pub mod st7565;

#[cfg(feature = "ssd1315")]
pub mod ssd1315;

#[cfg(test)]
mod mock;

pub use crate::traits::{Controller, InitStep, LcdDriver};

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::driver::CogLcd;
    pub use crate::interface::{LcdBus, SpiInterface};
    pub use crate::orientation::{DeviceInfo, Orientation, ScanDirection};
    pub use crate::rect::Area;
    pub use crate::traits::{Controller, LcdDriver};
    pub use crate::Error;
    pub use crate::SPI_MODE;

    #[cfg(feature = "graphics")]
    pub use embedded_graphics_core::pixelcolor::BinaryColor;
}

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode -
/// For more infos see [Requirements: SPI](index.html#spi)
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnFirstTransition,
    polarity: Polarity::IdleLow,
};
