mod decode;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use msxgfx_core::emit::{SourceWriter, Syntax};
use msxgfx_core::{SpriteEncoder, TileEncoder};

use crate::decode::load_png;

#[derive(Parser)]
#[command(
    name = "msxgfx-convert",
    version,
    about = "Convert PNG images to MSX sprites and tiles"
)]
struct Cli {
    /// Log per-cell progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 16x16 sprites, one frame per color of each cell
    Sprites(SpriteArgs),
    /// 8x8 tiles with two colors per row
    Tiles(TileArgs),
}

#[derive(Args)]
struct SpriteArgs {
    /// Variable name
    #[arg(short, long, default_value = "sprites")]
    id: String,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args)]
struct TileArgs {
    /// Variable name
    #[arg(short, long, default_value = "tileset")]
    id: String,

    /// Don't include colors
    #[arg(long)]
    no_colors: bool,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Image to convert (8-bit RGB PNG)
    image: PathBuf,

    /// ASM output (default: C header)
    #[arg(short, long)]
    asm: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    fn syntax(&self) -> Syntax {
        if self.asm {
            Syntax::Asm
        } else {
            Syntax::CHeader
        }
    }
}

fn convert_sprites(args: &SpriteArgs) -> anyhow::Result<Vec<u8>> {
    let grid = load_png(&args.out.image)?;
    let sheet = SpriteEncoder::default()
        .encode(&grid)
        .with_context(|| format!("{}", args.out.image.display()))?;
    if sheet.is_empty() {
        warn!("{} has no sprite pixels", args.out.image.display());
    }
    info!("Encoded {} sprite frame(s)", sheet.len());

    let mut writer = SourceWriter::new(Vec::new(), &args.id, args.out.syntax());
    writer.write_sprites(&sheet)?;
    writer.finish()
}

fn convert_tiles(args: &TileArgs) -> anyhow::Result<Vec<u8>> {
    let grid = load_png(&args.out.image)?;
    let tiles = TileEncoder::default()
        .encode(&grid)
        .with_context(|| format!("{}", args.out.image.display()))?;
    info!("Encoded {} tile(s)", tiles.count);

    let mut writer = SourceWriter::new(Vec::new(), &args.id, args.out.syntax());
    writer.write_tiles(&tiles, !args.no_colors)?;
    writer.finish()
}

/// Write the rendered text to `path`, or stdout when no path is given.
fn write_output(path: Option<&Path>, rendered: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Convert and write one image. Output is rendered fully before the
/// destination is touched, so a failed run leaves nothing behind.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let (rendered, output) = match &cli.command {
        Command::Sprites(args) => (convert_sprites(args)?, args.out.output.as_deref()),
        Command::Tiles(args) => (convert_tiles(args)?, args.out.output.as_deref()),
    };
    write_output(output, &rendered)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    run(&cli)
}
