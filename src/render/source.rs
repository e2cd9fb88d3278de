//! External source image loading and normalization.
//!
//! The alternate path to synthesis: take a user-supplied raster, convert
//! it to RGBA, centre-crop to square when needed, and resize it to the
//! working resolution so downstream stages see the same shape either way.

use std::path::Path;

use image::imageops::{self, FilterType};

use crate::error::{IconError, Result};

use super::{Canvas, BASE_SIZE};

/// Load and normalize an external base image.
///
/// Fails with `SourceNotFound` when the path does not exist and `Decode`
/// when the file is not a readable raster image.
pub fn load_base(path: &Path) -> Result<Canvas> {
    if !path.exists() {
        return Err(IconError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| IconError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut rgba = img.to_rgba8();

    // Centre-crop rectangular sources to square
    let (width, height) = rgba.dimensions();
    if width != height {
        let side = width.min(height);
        let left = (width - side) / 2;
        let top = (height - side) / 2;
        rgba = imageops::crop_imm(&rgba, left, top, side, side).to_image();
    }

    // Normalize to the working resolution
    let base = if rgba.dimensions() != (BASE_SIZE, BASE_SIZE) {
        imageops::resize(&rgba, BASE_SIZE, BASE_SIZE, FilterType::Lanczos3)
    } else {
        rgba
    };

    Ok(Canvas::from_rgba_image(&base))
}
