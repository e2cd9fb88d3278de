//! Generate command implementation.
//!
//! Synthesizes the brand mark and derives the full icon set from it.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::generate_icon_set;
use crate::render::{synthesize, write_png, MarkStyle, BASE_SIZE};
use crate::types::{Colour, IOS_SIZES};

/// Synthesize the brand mark and generate the full icon set
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output icon set directory
    #[arg(long, short, default_value = "AppIcon.appiconset")]
    pub output: PathBuf,

    /// Gradient colour at the top-left corner
    #[arg(long, default_value = "#FF6B35")]
    pub start: Colour,

    /// Gradient colour at the bottom-right corner
    #[arg(long, default_value = "#FF3B1E")]
    pub end: Colour,

    /// Badge disc colour
    #[arg(long, default_value = "#FFFFFFE6")]
    pub badge: Colour,

    /// Glyph and accent stroke colour
    #[arg(long, default_value = "#FF6B35")]
    pub glyph: Colour,

    /// Skip the accent strokes beside the glyph
    #[arg(long)]
    pub no_accents: bool,

    /// Also save the full-resolution master image to this path
    #[arg(long)]
    pub master: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let style = MarkStyle {
        gradient_start: args.start,
        gradient_end: args.end,
        badge: args.badge,
        glyph: args.glyph,
        accents: !args.no_accents,
    };

    printer.status("Composing", &format!("brand mark ({0}x{0})", BASE_SIZE));
    let base = synthesize(BASE_SIZE, &style)?;

    if let Some(master) = &args.master {
        write_png(&base, master)?;
        printer.status("Saved", &display_path(master));
    }

    let report = generate_icon_set(&base, &args.output, &IOS_SIZES, printer)?;

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(report.variants, "variant", "variants"),
            display_path(&args.output)
        ),
    );
    Ok(())
}
