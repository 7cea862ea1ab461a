use crate::error::{Error, Result};
use crate::format::{CellSize, Color};

/// Decoded RGB image, row-major. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Build from interleaved 8-bit samples. Only 3-channel data is accepted.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: &[u8]) -> Result<Self> {
        if channels as usize != Color::SIZE {
            return Err(Error::Format {
                found: format!("{channels} channel(s)"),
            });
        }
        let expected = width as usize * height as usize * Color::SIZE;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        let pixels = data.chunks_exact(Color::SIZE).map(Color::from_bytes).collect();
        Self::from_colors(width, height, pixels)
    }

    pub fn from_colors(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::BufferSize {
                expected: expected * Color::SIZE,
                actual: pixels.len() * Color::SIZE,
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// A grid filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        Self::from_colors(width, height, vec![color; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Panics if `(x, y)` is outside the grid.
    pub fn pixel_at(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// The 8 pixels starting at `(x, y)` going right. `x + 8` must not
    /// exceed the width.
    pub(crate) fn row8(&self, x: u32, y: u32) -> [Color; 8] {
        let start = y as usize * self.width as usize + x as usize;
        let mut row = [Color::default(); 8];
        row.copy_from_slice(&self.pixels[start..start + 8]);
        row
    }

    /// Fails unless both dimensions are multiples of `cell`.
    pub fn check_cells(&self, cell: CellSize) -> Result<()> {
        if self.width % cell.width != 0 || self.height % cell.height != 0 {
            return Err(Error::Dimension {
                width: self.width,
                height: self.height,
                cell,
            });
        }
        Ok(())
    }
}
