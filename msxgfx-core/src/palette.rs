//! Fixed hardware palette.
//!
//! Tile attribute bytes store palette indices, so the table order is part of
//! the output format.

use crate::error::PaletteError;
use crate::format::Color;

/// An ordered 16-entry hardware palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [Color; 16],
}

impl Palette {
    /// TOSHIBA-style MSX1 palette. Index 0 is the transparent/collapse slot,
    /// index 1 is black.
    pub const MSX: Palette = Palette {
        name: "msx",
        colors: [
            Color::new(255, 0, 255),
            Color::new(0, 0, 0),
            Color::new(102, 204, 102),
            Color::new(136, 238, 136),
            Color::new(68, 68, 221),
            Color::new(119, 119, 255),
            Color::new(187, 85, 85),
            Color::new(119, 221, 221),
            Color::new(221, 102, 102),
            Color::new(255, 119, 119),
            Color::new(204, 204, 85),
            Color::new(238, 238, 136),
            Color::new(85, 170, 85),
            Color::new(187, 85, 187),
            Color::new(204, 204, 204),
            Color::new(238, 238, 238),
        ],
    };

    /// Position of `color` in the table.
    pub fn index_of(&self, color: Color) -> Result<u8, PaletteError> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|i| i as u8)
            .ok_or(PaletteError { color })
    }

    /// Second color of a row that only uses one.
    pub fn fallback(&self) -> Color {
        self.colors[1]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::MSX
    }
}
