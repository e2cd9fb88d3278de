//! Variant resampling.
//!
//! Derives every catalogue entry from the immutable base canvas with a
//! Lanczos filter. Each resample is a pure function of the base and one
//! `SizeSpec`; production order never leaks into the result.

use image::imageops::{self, FilterType};

use crate::error::{IconError, Result};
use crate::types::{SizeSpec, VariantDescriptor};

use super::Canvas;

/// One produced variant: the resized raster plus its manifest descriptor.
#[derive(Debug, Clone)]
pub struct Variant {
    pub canvas: Canvas,
    pub descriptor: VariantDescriptor,
}

/// Resample the base canvas to the pixel dimensions of one spec.
///
/// The base is never mutated; a new canvas is returned. Nearest-neighbour
/// is deliberately not used anywhere on this path - store review rejects
/// aliased icons.
pub fn resample(base: &Canvas, spec: &SizeSpec) -> Result<Canvas> {
    if !(1..=3).contains(&spec.scale) {
        return Err(IconError::UnsupportedScale { scale: spec.scale });
    }
    if !base.is_square() {
        return Err(IconError::InvalidBase {
            width: base.width(),
            height: base.height(),
        });
    }

    let pixels = spec.pixels();
    let resized = imageops::resize(
        &base.to_rgba_image(),
        pixels,
        pixels,
        FilterType::Lanczos3,
    );
    Ok(Canvas::from_rgba_image(&resized))
}

/// Resample the base against a whole spec table, preserving table order.
pub fn resample_all(base: &Canvas, specs: &[SizeSpec]) -> Result<Vec<Variant>> {
    specs
        .iter()
        .map(|spec| {
            Ok(Variant {
                canvas: resample(base, spec)?,
                descriptor: VariantDescriptor::from_spec(spec),
            })
        })
        .collect()
}
