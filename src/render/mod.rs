//! Rendering module for appicon.
//!
//! Canvas primitives, brand-mark synthesis, source normalization, and
//! the variant resampler.

mod canvas;
mod mark;
mod png;
mod resample;
mod source;

pub use canvas::Canvas;
pub use mark::{gradient_at, synthesize, MarkStyle, BASE_SIZE};
pub use png::write_png;
pub use resample::{resample, resample_all, Variant};
pub use source::load_base;
