//! End-to-end icon set generation.
//!
//! Wires the stages together: base canvas in, one PNG per catalogue entry
//! plus the manifest out. The manifest is written last, after the count
//! check, so its presence on disk means the run completed; a failed run may
//! leave image files behind but never a manifest.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::manifest::{write_manifest, ManifestBuilder, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};
use crate::render::{resample_all, write_png, Canvas};
use crate::types::SizeSpec;

/// Summary of a completed run.
#[derive(Debug)]
pub struct IconSetReport {
    pub variants: usize,
    pub manifest_path: PathBuf,
}

/// Derive every variant from `base`, persist them into `out_dir`, and
/// write the manifest.
pub fn generate_icon_set(
    base: &Canvas,
    out_dir: &Path,
    specs: &[SizeSpec],
    printer: &Printer,
) -> Result<IconSetReport> {
    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(|e| IconError::Io {
            path: out_dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let variants = resample_all(base, specs)?;

    let mut builder = ManifestBuilder::new(specs.len());
    for variant in &variants {
        let path = out_dir.join(&variant.descriptor.filename);
        write_png(&variant.canvas, &path)?;
        builder.push(&variant.descriptor);

        let px = variant.canvas.width();
        printer.status(
            "Generated",
            &format!("{} ({px}x{px})", variant.descriptor.filename),
        );
    }

    let manifest = builder.finalize()?;
    let manifest_path = out_dir.join(MANIFEST_FILENAME);
    write_manifest(&manifest, &manifest_path)?;
    printer.status("Wrote", &display_path(&manifest_path));

    Ok(IconSetReport {
        variants: manifest.len(),
        manifest_path,
    })
}
