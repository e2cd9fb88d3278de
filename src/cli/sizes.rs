//! Sizes command implementation.
//!
//! Prints the size catalogue so the generated set can be checked against
//! the platform's current requirements without running the pipeline.

use clap::Args;

use crate::error::Result;
use crate::types::IOS_SIZES;

/// Print the size catalogue
#[derive(Args, Debug)]
pub struct SizesArgs {
    /// Only print the output filenames
    #[arg(long)]
    pub names: bool,
}

pub fn run(args: SizesArgs) -> Result<()> {
    if args.names {
        for spec in &IOS_SIZES {
            println!("{}", spec.filename());
        }
        return Ok(());
    }

    println!(
        "{:<22} {:<14} {:>10} {:>6} {:>8}",
        "FILENAME", "IDIOM", "SIZE", "SCALE", "PIXELS"
    );
    for spec in &IOS_SIZES {
        println!(
            "{:<22} {:<14} {:>10} {:>6} {:>8}",
            spec.filename(),
            spec.idiom().as_str(),
            spec.size_label(),
            spec.scale_label(),
            format!("{0}x{0}", spec.pixels()),
        );
    }
    Ok(())
}
