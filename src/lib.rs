//! appicon - procedural multi-resolution icon asset pipeline
//!
//! A library for synthesizing a square application icon (or normalizing an
//! external one), deriving the fixed iOS raster catalogue from it, and
//! emitting the matching asset-catalog manifest.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use error::{IconError, Result};
pub use manifest::{write_manifest, Manifest, ManifestBuilder, MANIFEST_FILENAME};
pub use pipeline::{generate_icon_set, IconSetReport};
pub use render::{
    gradient_at, load_base, resample, resample_all, synthesize, write_png, Canvas, MarkStyle,
    Variant, BASE_SIZE,
};
pub use types::{Colour, Idiom, Point, Rect, SizeSpec, VariantDescriptor, IOS_SIZES};
