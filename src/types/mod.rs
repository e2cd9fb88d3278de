//! Core domain types for appicon.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Point` / `Rect` - integer pixel geometry
//! - `SizeSpec` / `Idiom` / `VariantDescriptor` - the size catalogue

mod colour;
mod geometry;
mod spec;

pub use colour::Colour;
pub use geometry::{Point, Rect};
pub use spec::{Idiom, SizeSpec, VariantDescriptor, IOS_SIZES};
