pub mod format;
pub mod error;
pub mod grid;
pub mod palette;
pub mod sprite;
pub mod tile;
pub mod emit;

pub use error::{Error, PaletteError, Result};
pub use format::Color;
pub use grid::PixelGrid;
pub use palette::Palette;
pub use sprite::{SpriteEncoder, SpriteSheet};
pub use tile::{TileEncoder, TileSet};
