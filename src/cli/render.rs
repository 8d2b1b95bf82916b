//! Render command implementation.
//!
//! Draws one identity with the built-in font and writes its scale variants
//! next to each other. No manifest is written.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::export::{ensure_directory, export_scales, normalize_scales, write_png};
use crate::output::{display_path, Printer};
use crate::recipes::render_character;

/// Render a single identity
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Identity to draw (rama, sita, hanuman, demon, background)
    pub identity: String,

    #[arg(long, default_value_t = 200)]
    pub width: u32,

    #[arg(long, default_value_t = 300)]
    pub height: u32,

    /// Scale factor to export; repeat for several
    #[arg(long = "scale", value_name = "N")]
    pub scales: Vec<u32>,

    /// Output directory
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let scales = normalize_scales(&args.scales)?;
    let sprite = render_character(&args.identity, args.width, args.height)?;

    ensure_directory(&args.output)?;
    for variant in export_scales(&sprite, &scales) {
        let path = args.output.join(&variant.filename);
        write_png(&variant.canvas, &path)?;
        let (w, h) = variant.canvas.size();
        printer.status("Writing", &format!("{} {}", display_path(&path), printer.dim(&format!("({w}x{h})"))));
    }
    Ok(())
}
