use thiserror::Error;

use crate::format::{color_list, CellSize, Color};

/// A color that is not part of the hardware palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("color {color} is not in the palette")]
pub struct PaletteError {
    pub color: Color,
}

/// Conversion failures. Every variant aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("not a RGB image: expected 8-bit RGB, found {found}")]
    Format { found: String },

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error(
        "image size {width}x{height} is not multiple of cell size ({}, {})",
        .cell.width,
        .cell.height
    )]
    Dimension { width: u32, height: u32, cell: CellSize },

    #[error("tile {tile} ({x}, {y}) has more than two colors: {}", color_list(.colors))]
    TileColor {
        tile: usize,
        /// Left column of the tile.
        x: u32,
        /// Pixel row holding the offending colors.
        y: u32,
        colors: Vec<Color>,
    },

    #[error("tile {tile} ({x}, {y}) has a color not in the expected palette: {}", .source.color)]
    Palette {
        tile: usize,
        /// Left column of the tile.
        x: u32,
        /// Pixel row holding the offending color.
        y: u32,
        #[source]
        source: PaletteError,
    },

    #[error("more than {max} tiles ({count})")]
    Capacity { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
