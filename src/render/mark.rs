//! Brand mark synthesis.
//!
//! Builds the base icon procedurally: a diagonal gradient, a semi-opaque
//! badge disc, a stylized S glyph drawn as a sampled polyline, optional
//! accent strokes, and a soft drop shadow composited beneath it all.
//! For fixed inputs the output is bit-reproducible.

use crate::error::Result;
use crate::types::{Colour, Point, Rect};

use super::Canvas;

/// Working resolution of the synthesized base image.
pub const BASE_SIZE: u32 = 1024;

/// Number of samples along the glyph's parametric curve.
const GLYPH_SAMPLES: u32 = 50;

/// Colour parameters for the brand mark.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkStyle {
    /// Gradient colour at the top-left corner.
    pub gradient_start: Colour,
    /// Gradient colour at the bottom-right corner.
    pub gradient_end: Colour,
    /// Badge disc colour (semi-opaque white by default).
    pub badge: Colour,
    /// Glyph and accent stroke colour.
    pub glyph: Colour,
    /// Draw the horizontal accent strokes beside the glyph.
    pub accents: bool,
}

impl Default for MarkStyle {
    fn default() -> Self {
        Self {
            gradient_start: Colour::rgb(255, 107, 53),
            gradient_end: Colour::rgb(255, 59, 30),
            badge: Colour::new(255, 255, 255, 230),
            glyph: Colour::rgb(255, 107, 53),
            accents: true,
        }
    }
}

/// Gradient colour at a single pixel.
///
/// Pure in its arguments, so it can be evaluated per pixel in any order.
/// `t` runs over `(x + y) / (2 * (size - 1))` so the top-left corner is
/// exactly the start colour and the bottom-right exactly the end colour.
pub fn gradient_at(x: u32, y: u32, size: u32, start: Colour, end: Colour) -> Colour {
    let denom = 2 * size.saturating_sub(1);
    if denom == 0 {
        return start;
    }
    start.lerp(end, (x + y) as f32 / denom as f32)
}

/// Synthesize the brand mark at `size` x `size` pixels.
pub fn synthesize(size: u32, style: &MarkStyle) -> Result<Canvas> {
    let mut canvas = Canvas::new(size)?;
    let s = size as i32;

    // Diagonal gradient background
    canvas.fill_with(|x, y| gradient_at(x, y, size, style.gradient_start, style.gradient_end));

    // Badge disc, inset by a sixth of the canvas
    let badge_box = Rect::square(size).inset(s / 6);
    canvas.draw_ellipse(badge_box, style.badge, true);

    // S glyph as a thick polyline
    let stroke = (s / 12).max(1) as u32;
    let samples = glyph_points(size);
    for pair in samples.windows(2) {
        canvas.draw_line(pair[0], pair[1], style.glyph, stroke);
    }

    if style.accents {
        draw_accents(&mut canvas, size, style.glyph, stroke);
    }

    // Drop shadow on its own layer, beneath the main composition
    let mut shadow = Canvas::new(size)?;
    let offset = s / 50;
    shadow.draw_ellipse(
        badge_box.offset(offset, offset),
        Colour::new(0, 0, 0, 50),
        true,
    );

    Canvas::composite_over(&shadow, &canvas)
}

/// Sample the glyph's parametric curve.
///
/// The curve is split at the midpoint parameter into an upper and a lower
/// arc with opposite horizontal centre offsets, which produces the S shape.
fn glyph_points(size: u32) -> Vec<Point> {
    let s = size as i32;
    let cx = s / 2;
    let cy = s / 2;
    let arc_radius = (s / 4) as f32;
    let arc_offset = s / 8;

    (0..GLYPH_SAMPLES)
        .map(|i| {
            let t = i as f32 / (GLYPH_SAMPLES - 1) as f32;
            let y = cy - s / 4 + (t * (s / 2) as f32) as i32;
            let x = if t < 0.5 {
                let angle = std::f32::consts::PI * (1.0 - t * 2.0);
                cx + (angle.cos() * arc_radius) as i32 + arc_offset
            } else {
                let angle = std::f32::consts::PI * ((t - 0.5) * 2.0);
                cx - (angle.cos() * arc_radius) as i32 - arc_offset
            };
            Point::new(x, y)
        })
        .collect()
}

/// Horizontal accent strokes left of the glyph, decreasing in length,
/// opacity, and width to suggest motion.
fn draw_accents(canvas: &mut Canvas, size: u32, colour: Colour, stroke: u32) {
    let s = size as i32;
    let cx = s / 2;
    let cy = s / 2;
    let x0 = cx - s / 3;

    for (i, y) in [cy - s / 6, cy, cy + s / 6].into_iter().enumerate() {
        let length = s / 4 - i as i32 * (s / 20);
        let opacity = (200 - i as i32 * 40) as u8;
        let width = (stroke as i32 / 2 - 2 * i as i32).max(1) as u32;
        let accent = Colour::new(colour.r, colour.g, colour.b, opacity);
        canvas.draw_line(Point::new(x0, y), Point::new(x0 - length, y), accent, width);
    }
}
