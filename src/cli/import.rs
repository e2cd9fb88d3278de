//! Import command implementation.
//!
//! Builds the icon set from an externally supplied source image instead
//! of the synthesized mark.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::generate_icon_set;
use crate::render::load_base;
use crate::types::IOS_SIZES;

/// Generate the icon set from an existing source image
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Source image (PNG or JPEG, ideally square and at least 1024px)
    pub source: PathBuf,

    /// Output icon set directory
    #[arg(long, short, default_value = "AppIcon.appiconset")]
    pub output: PathBuf,
}

pub fn run(args: ImportArgs, printer: &Printer) -> Result<()> {
    let base = load_base(&args.source)?;
    printer.status("Imported", &display_path(&args.source));

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use crate::manifest::MANIFEST_FILENAME;
    use tempfile::tempdir;

    #[test]
    fn test_import_missing_source_leaves_no_manifest() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("set");

        let err = run(
            ImportArgs {
                source: dir.path().join("missing.png"),
                output: output.clone(),
            },
            &Printer::new(),
        )
        .unwrap_err();

        assert!(matches!(err, IconError::SourceNotFound { .. }));
        assert!(!output.join(MANIFEST_FILENAME).exists());
    }

    #[test]
    fn test_import_builds_full_set() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source.png");
        let output = dir.path().join("set");

        let mut img = image::RgbaImage::new(128, 128);
        for p in img.pixels_mut() {
            *p = image::Rgba([40, 90, 200, 255]);
        }
        img.save(&source).unwrap();

        run(
            ImportArgs {
                source,
                output: output.clone(),
            },
            &Printer::new(),
        )
        .unwrap();

        assert!(output.join(MANIFEST_FILENAME).exists());
        for spec in &IOS_SIZES {
            let path = output.join(spec.filename());
            let img = image::open(&path).unwrap().to_rgba8();
            assert_eq!(img.dimensions(), (spec.pixels(), spec.pixels()));
        }
    }
}
