use log::debug;

use crate::error::Result;
use crate::format::*;
use crate::grid::PixelGrid;

/// Quadrant origins inside a sprite cell, in hardware order:
/// top-left, bottom-left, top-right, bottom-right.
const QUADRANTS: [(u32, u32); 4] = [(0, 0), (0, 8), (8, 0), (8, 8)];

/// Encoded sprite layers, one per (cell, color) pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpriteSheet {
    pub frames: Vec<Frame>,
}

impl SpriteSheet {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total bytes of frame data.
    pub fn byte_len(&self) -> usize {
        self.frames.len() * FRAME_SIZE
    }
}

/// Splits an image into 16x16 cells and emits one monochrome layer per
/// non-transparent color of each cell.
#[derive(Clone, Copy, Debug)]
pub struct SpriteEncoder {
    pub transparent: Color,
}

impl Default for SpriteEncoder {
    fn default() -> Self {
        Self {
            transparent: TRANSPARENT_KEY,
        }
    }
}

impl SpriteEncoder {
    pub fn new(transparent: Color) -> Self {
        Self { transparent }
    }

    pub fn encode(&self, grid: &PixelGrid) -> Result<SpriteSheet> {
        grid.check_cells(SPRITE_CELL)?;

        let mut sheet = SpriteSheet::default();
        for (x, y) in cell_origins(grid.width(), grid.height(), SPRITE_CELL) {
            let colors = self.cell_colors(grid, x, y);
            if colors.is_empty() {
                continue;
            }
            debug!("sprite cell ({x}, {y}): {} layer(s)", colors.len());
            for color in colors {
                sheet.frames.push(layer(grid, x, y, color));
            }
        }
        Ok(sheet)
    }

    /// Distinct non-transparent colors of the cell at `(x, y)`, in order of
    /// first appearance scanning rows top to bottom.
    fn cell_colors(&self, grid: &PixelGrid, x: u32, y: u32) -> Vec<Color> {
        let mut colors = Vec::new();
        for j in 0..SPRITE_CELL.height {
            for i in 0..SPRITE_CELL.width {
                let c = grid.pixel_at(x + i, y + j);
                if c != self.transparent && !colors.contains(&c) {
                    colors.push(c);
                }
            }
        }
        colors
    }
}

/// Bitplane of `color` over the cell at `(x, y)`.
fn layer(grid: &PixelGrid, x: u32, y: u32, color: Color) -> Frame {
    let mut frame = [0u8; FRAME_SIZE];
    let mut bytes = frame.iter_mut();
    for (qx, qy) in QUADRANTS {
        for m in 0..8 {
            let row = grid.row8(x + qx, y + qy + m);
            if let Some(byte) = bytes.next() {
                *byte = pack_bits(row.iter().map(|&c| c == color));
            }
        }
    }
    frame
}
