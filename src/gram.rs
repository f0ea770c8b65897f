//! Shadow copy of the controller's display RAM
//!
//! The controller RAM is organised in 8 horizontal pages of 128 columns. Every
//! column byte stacks 8 pixels vertically: bit `b` of `(page, column)` is the
//! pixel on physical row `page * 8 + b`.

use core::ops::RangeInclusive;

use bit_field::BitField;

use crate::color::Color;

/// Number of 8 pixel pages
pub const PAGES: usize = 8;
/// Number of columns per page
pub const COLUMNS: usize = 128;
/// Physical rows covered by the shadow
pub const ROWS: usize = PAGES * 8;

/// Shadow memory of one panel, always in physical (landscape) coordinates
#[derive(Clone, PartialEq, Eq)]
pub struct Gram {
    pages: [[u8; COLUMNS]; PAGES],
}

impl Default for Gram {
    fn default() -> Self {
        Self {
            pages: [[0u8; COLUMNS]; PAGES],
        }
    }
}

impl core::fmt::Debug for Gram {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gram").field("pages", &PAGES).field("columns", &COLUMNS).finish()
    }
}

impl Gram {
    /// Zeroed shadow, every pixel off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the bit of the physical pixel `(px, py)`.
    ///
    /// Callers guarantee `px < COLUMNS` and `py < ROWS`.
    pub(crate) fn set_pixel(&mut self, px: u16, py: u16, color: Color) {
        let (page, column, bit) = locate(px, py);
        self.pages[page][column].set_bit(bit, color.is_on());
    }

    /// Color of a physical pixel, `None` outside the shadow
    pub fn pixel(&self, px: u16, py: u16) -> Option<Color> {
        if px as usize >= COLUMNS || py as usize >= ROWS {
            return None;
        }
        let (page, column, bit) = locate(px, py);
        Some(Color::from(self.pages[page][column].get_bit(bit)))
    }

    /// One column byte
    pub fn byte(&self, page: usize, column: usize) -> u8 {
        self.pages[page][column]
    }

    /// The contiguous column run of one page, as sent in a refresh
    pub fn run(&self, page: usize, columns: RangeInclusive<usize>) -> &[u8] {
        &self.pages[page][columns]
    }

    /// All pages
    pub fn pages(&self) -> &[[u8; COLUMNS]; PAGES] {
        &self.pages
    }

    /// Set every byte to the given color
    pub fn fill(&mut self, color: Color) {
        for page in self.pages.iter_mut() {
            page.fill(color.get_byte_value());
        }
    }
}

/// `(page, column, bit)` of a physical pixel
fn locate(px: u16, py: u16) -> (usize, usize, usize) {
    (py as usize / 8, px as usize, py as usize % 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_on_creation() {
        let gram = Gram::new();
        assert!(gram.pages().iter().flatten().all(|&b| b == 0));
    }

    #[test]
    fn bit_layout() {
        let mut gram = Gram::new();
        gram.set_pixel(5, 0, Color::Black);
        gram.set_pixel(5, 7, Color::Black);
        gram.set_pixel(127, 63, Color::Black);

        assert_eq!(gram.byte(0, 5), 0b1000_0001);
        assert_eq!(gram.byte(7, 127), 0b1000_0000);
        assert_eq!(gram.pixel(5, 7), Some(Color::Black));
        assert_eq!(gram.pixel(5, 6), Some(Color::White));
    }

    #[test]
    fn white_clears_only_its_bit() {
        let mut gram = Gram::new();
        gram.fill(Color::Black);
        gram.set_pixel(10, 19, Color::White);

        assert_eq!(gram.byte(2, 10), 0b1111_0111);
        assert_eq!(gram.byte(2, 11), 0xff);
        assert_eq!(gram.byte(1, 10), 0xff);
    }

    #[test]
    fn pixel_outside_shadow() {
        let gram = Gram::new();
        assert_eq!(gram.pixel(128, 0), None);
        assert_eq!(gram.pixel(0, 64), None);
    }

    #[test]
    fn run_is_inclusive() {
        let mut gram = Gram::new();
        gram.set_pixel(3, 8, Color::Black);
        assert_eq!(gram.run(1, 2..=4), &[0x00, 0x01, 0x00]);
        assert_eq!(gram.run(0, 0..=127).len(), 128);
    }
}
