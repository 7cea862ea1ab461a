use log::debug;

use crate::error::{Error, Result};
use crate::format::*;
use crate::grid::PixelGrid;
use crate::palette::Palette;

/// The two colors a tile row may use, in order of first appearance.
/// Pixels of `low` pack as 0, pixels of `high` as 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowAttribute {
    pub low: Color,
    pub high: Color,
    /// `(index(high) << 4) | index(low)`
    pub byte: u8,
}

impl RowAttribute {
    /// Bit for `color` in this row; `color` must be one of the pair.
    fn bit(&self, color: Color) -> bool {
        color != self.low
    }

    /// Packs 8 pixels MSB-first against this attribute pair.
    pub fn pack(&self, row: &[Color; 8]) -> u8 {
        pack_bits(row.iter().map(|&c| self.bit(c)))
    }
}

/// Pattern bytes plus the parallel attribute bytes, 8 of each per tile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileSet {
    pub patterns: Vec<u8>,
    pub colors: Vec<u8>,
    pub count: usize,
}

/// Encodes 8x8 tiles with two palette colors per pixel row.
#[derive(Clone, Debug)]
pub struct TileEncoder {
    pub palette: Palette,
    pub max_tiles: usize,
}

impl Default for TileEncoder {
    fn default() -> Self {
        Self {
            palette: Palette::MSX,
            max_tiles: MAX_TILES,
        }
    }
}

impl TileEncoder {
    pub fn encode(&self, grid: &PixelGrid) -> Result<TileSet> {
        grid.check_cells(TILE_CELL)?;

        let mut set = TileSet::default();
        for (x, y) in cell_origins(grid.width(), grid.height(), TILE_CELL) {
            let tile = set.count;
            for j in 0..TILE_CELL.height {
                let row = grid.row8(x, y + j);
                let attr = self.row_attribute(&row, tile, x, y + j)?;
                set.colors.push(attr.byte);
                set.patterns.push(attr.pack(&row));
            }
            set.count += 1;
        }
        debug!("encoded {} tile(s)", set.count);

        if set.count > self.max_tiles {
            return Err(Error::Capacity {
                count: set.count,
                max: self.max_tiles,
            });
        }
        Ok(set)
    }

    /// Attribute pair for one row of `tile`; `(x, y)` locates the row for
    /// diagnostics.
    pub fn row_attribute(&self, row: &[Color; 8], tile: usize, x: u32, y: u32) -> Result<RowAttribute> {
        let mut seen: Vec<Color> = Vec::with_capacity(8);
        for &c in row {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }

        if seen.len() > 2 {
            return Err(Error::TileColor {
                tile,
                x,
                y,
                colors: seen,
            });
        }
        let low = seen[0];
        let high = seen.get(1).copied().unwrap_or_else(|| self.palette.fallback());

        let index = |color| {
            self.palette
                .index_of(color)
                .map_err(|source| Error::Palette { tile, x, y, source })
        };
        let lo = index(low)?;
        let hi = index(high)?;

        Ok(RowAttribute {
            low,
            high,
            byte: (hi << 4) | lo,
        })
    }
}
