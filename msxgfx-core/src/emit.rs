use std::io::Write;

use crate::format::FRAME_SIZE;
use crate::sprite::SpriteSheet;
use crate::tile::TileSet;

/// Bytes per output line.
const BYTES_PER_LINE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syntax {
    /// C header with a `LOCAL` switch between definitions and `extern`s.
    CHeader,
    /// Assembler listing with `db` directives.
    Asm,
}

/// `0x..` lines, every line terminated by a comma.
fn hex_lines_c(src: &[u8]) -> String {
    let mut out = String::new();
    for chunk in src.chunks(BYTES_PER_LINE) {
        let items: Vec<String> = chunk.iter().map(|b| format!("0x{b:02x}")).collect();
        out.push_str(&items.join(", "));
        out.push_str(",\n");
    }
    out
}

/// `\tdb #..` lines.
fn hex_lines_asm(src: &[u8]) -> String {
    let mut out = String::new();
    for chunk in src.chunks(BYTES_PER_LINE) {
        let items: Vec<String> = chunk.iter().map(|b| format!("#{b:02x}")).collect();
        out.push_str("\tdb ");
        out.push_str(&items.join(", "));
        out.push('\n');
    }
    out
}

/// Renders encoded data as source text under one identifier.
pub struct SourceWriter<W: Write> {
    writer: W,
    id: String,
    macro_id: String,
    syntax: Syntax,
}

impl<W: Write> SourceWriter<W> {
    pub fn new(writer: W, id: &str, syntax: Syntax) -> Self {
        Self {
            writer,
            id: id.to_string(),
            macro_id: id.to_uppercase(),
            syntax,
        }
    }

    /// Write a sprite sheet as an array of 32-byte frames.
    pub fn write_sprites(&mut self, sheet: &SpriteSheet) -> anyhow::Result<()> {
        match self.syntax {
            Syntax::CHeader => self.sprites_c(sheet),
            Syntax::Asm => self.sprites_asm(sheet),
        }
    }

    /// Write tile patterns, followed by the attribute table when `colors` is set.
    pub fn write_tiles(&mut self, tiles: &TileSet, colors: bool) -> anyhow::Result<()> {
        match self.syntax {
            Syntax::CHeader => self.tiles_c(tiles, colors),
            Syntax::Asm => self.tiles_asm(tiles, colors),
        }
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> anyhow::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn sprites_c(&mut self, sheet: &SpriteSheet) -> anyhow::Result<()> {
        let (id, up, w) = (&self.id, &self.macro_id, &mut self.writer);
        let n = sheet.len();

        writeln!(w, "#ifndef _{up}_H")?;
        writeln!(w, "#define _{up}_H\n")?;
        writeln!(w, "#define {up}_LEN {}\n", sheet.byte_len())?;
        writeln!(w, "#define {up}_FRAMES {n}\n")?;

        // C has no zero-length arrays; an empty sheet only gets the counts.
        if sheet.is_empty() {
            writeln!(w, "#endif // _{up}_H\n")?;
            return Ok(());
        }

        let frames: Vec<String> = sheet
            .frames
            .iter()
            .map(|f| format!("{{\n{}}}", hex_lines_c(f)))
            .collect();
        writeln!(w, "#ifdef LOCAL")?;
        writeln!(
            w,
            "const unsigned char {id}[{n}][{FRAME_SIZE}] = {{\n{}\n}};\n",
            frames.join(",\n")
        )?;
        writeln!(w, "#else\n")?;
        writeln!(w, "extern const unsigned char {id}[{n}][{FRAME_SIZE}];")?;
        writeln!(w, "#endif // LOCAL\n")?;
        writeln!(w, "#endif // _{up}_H\n")?;
        Ok(())
    }

    fn sprites_asm(&mut self, sheet: &SpriteSheet) -> anyhow::Result<()> {
        let (id, up, w) = (&self.id, &self.macro_id, &mut self.writer);

        writeln!(w, "{up}_LEN = {}", sheet.byte_len())?;
        writeln!(w, "{up}_FRAMES = {}\n", sheet.len())?;
        writeln!(w, "{id}:\n")?;
        for (i, frame) in sheet.frames.iter().enumerate() {
            writeln!(w, "{id}_frame{i}:")?;
            writeln!(w, "{}", hex_lines_asm(frame))?;
        }
        Ok(())
    }

    fn tiles_c(&mut self, tiles: &TileSet, colors: bool) -> anyhow::Result<()> {
        let (id, up, w) = (&self.id, &self.macro_id, &mut self.writer);
        let len = tiles.patterns.len();
        let col_len = tiles.colors.len();

        writeln!(w, "#ifndef _{up}_H")?;
        writeln!(w, "#define _{up}_H\n")?;
        writeln!(w, "/* {} tiles */\n", tiles.count)?;

        writeln!(w, "#ifdef LOCAL")?;
        writeln!(
            w,
            "const unsigned char {id}[{len}] = {{\n{}\n}};\n",
            hex_lines_c(&tiles.patterns)
        )?;
        if colors {
            writeln!(
                w,
                "const unsigned char {id}_colors[{col_len}] = {{\n{}\n}};\n",
                hex_lines_c(&tiles.colors)
            )?;
        }
        writeln!(w, "#else\n")?;
        writeln!(w, "extern const unsigned char {id}[{len}];")?;
        if colors {
            writeln!(w, "extern const unsigned char {id}_colors[{col_len}];")?;
        }
        writeln!(w, "#endif // LOCAL\n")?;
        writeln!(w, "#endif // _{up}_H\n")?;
        Ok(())
    }

    fn tiles_asm(&mut self, tiles: &TileSet, colors: bool) -> anyhow::Result<()> {
        let (id, w) = (&self.id, &mut self.writer);

        writeln!(w, ";; {} tiles\n", tiles.count)?;
        writeln!(w, "{id}:")?;
        writeln!(w, "{}", hex_lines_asm(&tiles.patterns))?;
        if colors {
            writeln!(w, "{id}_col:")?;
            writeln!(w, "{}", hex_lines_asm(&tiles.colors))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_sprites(sheet: &SpriteSheet, syntax: Syntax) -> String {
        let mut out = SourceWriter::new(Vec::new(), "player", syntax);
        out.write_sprites(sheet).unwrap();
        String::from_utf8(out.finish().unwrap()).unwrap()
    }

    fn render_tiles(tiles: &TileSet, syntax: Syntax, colors: bool) -> String {
        let mut out = SourceWriter::new(Vec::new(), "bg", syntax);
        out.write_tiles(tiles, colors).unwrap();
        String::from_utf8(out.finish().unwrap()).unwrap()
    }

    fn one_tile() -> TileSet {
        TileSet {
            patterns: (0u8..8).collect(),
            colors: vec![0x1f; 8],
            count: 1,
        }
    }

    #[test]
    fn hex_lines_group_by_eight() {
        let bytes: Vec<u8> = (0u8..10).collect();
        assert_eq!(
            hex_lines_c(&bytes),
            "0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,\n0x08, 0x09,\n"
        );
        assert_eq!(
            hex_lines_asm(&bytes),
            "\tdb #00, #01, #02, #03, #04, #05, #06, #07\n\tdb #08, #09\n"
        );
    }

    #[test]
    fn sprites_c_header() {
        let mut frame = [0u8; FRAME_SIZE];
        frame[0] = 0xff;
        let sheet = SpriteSheet { frames: vec![frame, [0x81; FRAME_SIZE]] };
        let zero = "0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,\n";
        let ones = "0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81,\n";
        let expected = format!(
            "#ifndef _PLAYER_H\n#define _PLAYER_H\n\n\
             #define PLAYER_LEN 64\n\n\
             #define PLAYER_FRAMES 2\n\n\
             #ifdef LOCAL\n\
             const unsigned char player[2][32] = {{\n\
             {{\n0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,\n{zero}{zero}{zero}}},\n\
             {{\n{ones}{ones}{ones}{ones}}}\n\
             }};\n\n\
             #else\n\n\
             extern const unsigned char player[2][32];\n\
             #endif // LOCAL\n\n\
             #endif // _PLAYER_H\n\n"
        );
        assert_eq!(render_sprites(&sheet, Syntax::CHeader), expected);
    }

    #[test]
    fn empty_sprites_c_header_has_no_arrays() {
        let out = render_sprites(&SpriteSheet::default(), Syntax::CHeader);
        assert_eq!(
            out,
            "#ifndef _PLAYER_H\n#define _PLAYER_H\n\n\
             #define PLAYER_LEN 0\n\n\
             #define PLAYER_FRAMES 0\n\n\
             #endif // _PLAYER_H\n\n"
        );
        assert!(!out.contains("[0]"));
    }

    #[test]
    fn sprites_asm_listing() {
        let sheet = SpriteSheet { frames: vec![[0x0f; FRAME_SIZE]] };
        let line = "\tdb #0f, #0f, #0f, #0f, #0f, #0f, #0f, #0f\n";
        let expected = format!(
            "PLAYER_LEN = 32\nPLAYER_FRAMES = 1\n\nplayer:\n\nplayer_frame0:\n{line}{line}{line}{line}\n"
        );
        assert_eq!(render_sprites(&sheet, Syntax::Asm), expected);
    }

    #[test]
    fn tiles_c_header() {
        let expected = "#ifndef _BG_H\n#define _BG_H\n\n\
             /* 1 tiles */\n\n\
             #ifdef LOCAL\n\
             const unsigned char bg[8] = {\n0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,\n\n};\n\n\
             const unsigned char bg_colors[8] = {\n0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f,\n\n};\n\n\
             #else\n\n\
             extern const unsigned char bg[8];\n\
             extern const unsigned char bg_colors[8];\n\
             #endif // LOCAL\n\n\
             #endif // _BG_H\n\n";
        assert_eq!(render_tiles(&one_tile(), Syntax::CHeader, true), expected);
    }

    #[test]
    fn tiles_c_header_without_colors() {
        let out = render_tiles(&one_tile(), Syntax::CHeader, false);
        assert!(!out.contains("bg_colors"));
        assert!(out.contains("extern const unsigned char bg[8];\n#endif // LOCAL"));
    }

    #[test]
    fn tiles_asm_listing() {
        let expected = ";; 1 tiles\n\nbg:\n\
             \tdb #00, #01, #02, #03, #04, #05, #06, #07\n\n\
             bg_col:\n\
             \tdb #1f, #1f, #1f, #1f, #1f, #1f, #1f, #1f\n\n";
        assert_eq!(render_tiles(&one_tile(), Syntax::Asm, true), expected);

        let no_col = render_tiles(&one_tile(), Syntax::Asm, false);
        assert!(!no_col.contains("bg_col:"));
    }
}
