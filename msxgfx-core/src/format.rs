use std::fmt;

/// An 8-bit-per-channel RGB color. Equality is exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const SIZE: usize = 3;

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_bytes(b: &[u8]) -> Self {
        Self {
            r: b[0],
            g: b[1],
            b: b[2],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Formats a color list as `[(r, g, b), ...]` for diagnostics.
pub fn color_list(colors: &[Color]) -> String {
    let items: Vec<String> = colors.iter().map(Color::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Width and height of one encoding cell, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

/// Hardware sprites are 16x16, stored as four 8x8 quadrants.
pub const SPRITE_CELL: CellSize = CellSize { width: 16, height: 16 };

/// Background pattern tiles.
pub const TILE_CELL: CellSize = CellSize { width: 8, height: 8 };

/// Sprite pixels of this color are "no pixel here".
pub const TRANSPARENT_KEY: Color = Color::new(28, 28, 28);

/// Bytes in one sprite frame: 4 quadrants x 8 rows.
pub const FRAME_SIZE: usize = 32;

/// Pattern table capacity.
pub const MAX_TILES: usize = 256;

/// One monochrome 16x16 sprite layer, quadrant-major.
pub type Frame = [u8; FRAME_SIZE];

/// Cell origins of a `width` x `height` grid, rows of cells top to bottom,
/// left to right within a row.
pub fn cell_origins(width: u32, height: u32, cell: CellSize) -> impl Iterator<Item = (u32, u32)> {
    (0..height)
        .step_by(cell.height as usize)
        .flat_map(move |y| (0..width).step_by(cell.width as usize).map(move |x| (x, y)))
}

/// Packs 8 flags into one byte, first flag in the most significant bit.
pub fn pack_bits(bits: impl IntoIterator<Item = bool>) -> u8 {
    bits.into_iter()
        .take(8)
        .enumerate()
        .fold(0u8, |byte, (k, set)| byte | ((set as u8) << (7 - k)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_row_major() {
        let origins: Vec<_> = cell_origins(32, 16, TILE_CELL).collect();
        assert_eq!(
            origins,
            vec![(0, 0), (8, 0), (16, 0), (24, 0), (0, 8), (8, 8), (16, 8), (24, 8)]
        );
    }

    #[test]
    fn pack_bits_msb_first() {
        assert_eq!(pack_bits([true, false, false, false, false, false, false, false]), 0x80);
        assert_eq!(pack_bits([false, false, false, false, false, false, false, true]), 0x01);
        assert_eq!(pack_bits([true, true, false, false, true, false, true, false]), 0xca);
    }

    #[test]
    fn color_display_matches_tuple_form() {
        assert_eq!(Color::new(28, 28, 28).to_string(), "(28, 28, 28)");
        assert_eq!(
            color_list(&[Color::new(0, 0, 0), Color::new(255, 0, 255)]),
            "[(0, 0, 0), (255, 0, 255)]"
        );
    }
}
