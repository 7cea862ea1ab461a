use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;
use log::info;
use msxgfx_core::{Error, PixelGrid};

/// Load a PNG file into a pixel grid. Only 8-bit RGB images are accepted.
pub fn load_png(path: &Path) -> anyhow::Result<PixelGrid> {
    let file = File::open(path)
        .with_context(|| format!("failed to open the image {}", path.display()))?;
    let grid = decode_png(BufReader::new(file))
        .with_context(|| format!("failed to read {}", path.display()))?;
    info!(
        "Loaded {}: {}x{} pixels",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

pub fn decode_png<R: Read>(input: R) -> anyhow::Result<PixelGrid> {
    // Identity transformations: palette and alpha images stay as they are so
    // they can be rejected below instead of silently expanded.
    let decoder = png::Decoder::new(input);
    let mut reader = decoder.read_info().context("failed to decode PNG header")?;

    let (color_type, bit_depth) = {
        let info = reader.info();
        (info.color_type, info.bit_depth)
    };
    if color_type != png::ColorType::Rgb || bit_depth != png::BitDepth::Eight {
        return Err(Error::Format {
            found: format!("{color_type:?} at {} bits per sample", bit_depth as u8),
        }
        .into());
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .context("failed to decode PNG image data")?;

    // Drop any per-line padding.
    let row = frame.width as usize * 3;
    let mut data = Vec::with_capacity(row * frame.height as usize);
    for line in buf[..frame.buffer_size()].chunks(frame.line_size) {
        data.extend_from_slice(&line[..row]);
    }

    Ok(PixelGrid::from_raw(frame.width, frame.height, 3, &data)?)
}
