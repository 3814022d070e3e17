//! Colors and the palette the sequencer cycles through.

use core::iter::Copied;
use core::slice::Iter;

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Ordered, read-only set of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<const N: usize> {
    colors: [Rgb; N],
}

impl<const N: usize> Palette<N> {
    pub const fn new(colors: [Rgb; N]) -> Self {
        Self { colors }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get the color at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    pub const fn colors(&self) -> &[Rgb; N] {
        &self.colors
    }

    pub fn iter(&self) -> Copied<Iter<'_, Rgb>> {
        self.colors.iter().copied()
    }
}

/// Black, blue, green, cyan, red, magenta, yellow, white.
pub const REFERENCE_PALETTE: Palette<8> = Palette::new([
    Rgb { r: 0x00, g: 0x00, b: 0x00 },
    Rgb { r: 0x00, g: 0x00, b: 0xFF },
    Rgb { r: 0x00, g: 0xFF, b: 0x00 },
    Rgb { r: 0x00, g: 0xFF, b: 0xFF },
    Rgb { r: 0xFF, g: 0x00, b: 0x00 },
    Rgb { r: 0xFF, g: 0x00, b: 0xFF },
    Rgb { r: 0xFF, g: 0xFF, b: 0x00 },
    Rgb { r: 0xFF, g: 0xFF, b: 0xFF },
]);
