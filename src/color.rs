//! B/W Color for the page-addressed panels

#[cfg(feature = "graphics")]
use embedded_graphics_core::pixelcolor::BinaryColor;

/// Raw framework colour word for black (RGB565)
pub const RAW_BLACK: u16 = 0x0000;
/// Raw framework colour word for white (RGB565)
pub const RAW_WHITE: u16 = 0xFFFF;

/// Only two states exist on these panels: a set bit is a black (lit) pixel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Pixel on, bit set in the shadow memory
    Black,
    /// Pixel off, bit cleared in the shadow memory
    #[default]
    White,
}

impl Color {
    /// Gets a full column byte (8 stacked pixels) of this color
    pub fn get_byte_value(self) -> u8 {
        match self {
            Color::White => 0x00,
            Color::Black => 0xff,
        }
    }

    /// Whether drawing with this color sets the shadow bit
    pub fn is_on(self) -> bool {
        self == Color::Black
    }

    /// Raw 16 bit color word as the framework would pass it
    pub fn raw(self) -> u16 {
        match self {
            Color::Black => RAW_BLACK,
            Color::White => RAW_WHITE,
        }
    }
}

/// Only `RAW_BLACK` is black, any other word clears the pixel
impl From<u16> for Color {
    fn from(value: u16) -> Self {
        if value == RAW_BLACK {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on {
            Color::Black
        } else {
            Color::White
        }
    }
}

#[cfg(feature = "graphics")]
impl From<BinaryColor> for Color {
    fn from(b: BinaryColor) -> Color {
        match b {
            BinaryColor::On => Color::Black,
            BinaryColor::Off => Color::White,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for BinaryColor {
    fn from(color: Color) -> BinaryColor {
        match color {
            Color::Black => BinaryColor::On,
            Color::White => BinaryColor::Off,
        }
    }
}
