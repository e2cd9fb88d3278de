//! PNG output for canvases.

use std::path::Path;

use crate::error::{IconError, Result};

use super::Canvas;

/// Write a canvas to a PNG file.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    canvas.to_rgba_image().save(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}
