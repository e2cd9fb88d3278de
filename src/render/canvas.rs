//! Canvas - an owned grid of RGBA pixels with drawing primitives.
//!
//! The composer mutates a canvas while building the base image; once a
//! canvas is handed downstream it is treated as immutable, and every
//! operation that derives a new image returns a fresh canvas.

use image::RgbaImage;

use crate::error::{IconError, Result};
use crate::types::{Colour, Point, Rect};

/// A mutable width x height grid of colours (row-major: pixels[y][x]).
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Vec<Colour>>,
}

impl Canvas {
    /// Create a square canvas with every pixel fully transparent.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(IconError::InvalidDimension {
                width: size,
                height: size,
            });
        }
        Ok(Self {
            width: size,
            height: size,
            pixels: vec![vec![Colour::TRANSPARENT; size as usize]; size as usize],
        })
    }

    /// Convert a decoded RGBA image into a canvas.
    ///
    /// The result is not necessarily square; source normalization crops
    /// before calling this.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| Colour::from_rgba(img.get_pixel(x, y).0))
                    .collect()
            })
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert the canvas to an RGBA image buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        for (y, row) in self.pixels.iter().enumerate() {
            for (x, colour) in row.iter().enumerate() {
                img.put_pixel(x as u32, y as u32, image::Rgba(colour.to_rgba()));
            }
        }
        img
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Get a pixel, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Overwrite a pixel unconditionally (no blending).
    ///
    /// Fails with `OutOfBounds` outside the grid; used for raw fills where
    /// silently dropping a write would hide a geometry bug.
    pub fn set_pixel(&mut self, p: Point, colour: Colour) -> Result<()> {
        if p.x < 0 || p.y < 0 || p.x >= self.width as i32 || p.y >= self.height as i32 {
            return Err(IconError::OutOfBounds {
                x: p.x,
                y: p.y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels[p.y as usize][p.x as usize] = colour;
        Ok(())
    }

    /// Overwrite a pixel, silently clipping at the edges.
    fn put(&mut self, x: i32, y: i32, colour: Colour) {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            self.pixels[y as usize][x as usize] = colour;
        }
    }

    /// Fill every pixel from a pure colour function of its coordinates.
    pub fn fill_with(&mut self, colour_at: impl Fn(u32, u32) -> Colour) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.pixels[y as usize][x as usize] = colour_at(x, y);
            }
        }
    }

    /// Rasterize a straight segment with the given stroke width.
    ///
    /// A pixel is covered when its centre lies within `width / 2` of the
    /// segment, so the result is symmetric in the endpoints. Clips at the
    /// canvas edges.
    pub fn draw_line(&mut self, p0: Point, p1: Point, colour: Colour, width: u32) {
        let radius = width.max(1) as f32 / 2.0;
        let pad = radius.ceil() as i32 + 1;

        let min_x = (p0.x.min(p1.x) - pad).max(0);
        let max_x = (p0.x.max(p1.x) + pad).min(self.width as i32 - 1);
        let min_y = (p0.y.min(p1.y) - pad).max(0);
        let max_y = (p0.y.max(p1.y) + pad).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if segment_distance(x as f32, y as f32, p0, p1) <= radius {
                    self.put(x, y, colour);
                }
            }
        }
    }

    /// Draw an ellipse inscribed in `bbox`, filled or as a one-pixel ring.
    pub fn draw_ellipse(&mut self, bbox: Rect, colour: Colour, filled: bool) {
        let (cx, cy) = bbox.center();
        let rx = (bbox.width() as f32 / 2.0).max(0.5);
        let ry = (bbox.height() as f32 / 2.0).max(0.5);

        let min_x = bbox.x0.max(0);
        let max_x = bbox.x1.min(self.width as i32 - 1);
        let min_y = bbox.y0.max(0);
        let max_y = bbox.y1.min(self.height as i32 - 1);

        // Inner radii for the outline ring, one pixel in
        let irx = (rx - 1.0).max(0.0);
        let iry = (ry - 1.0).max(0.0);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let outer = (dx / rx).powi(2) + (dy / ry).powi(2);
                if outer > 1.0 {
                    continue;
                }
                if filled {
                    self.put(x, y, colour);
                } else {
                    let inner = if irx > 0.0 && iry > 0.0 {
                        (dx / irx).powi(2) + (dy / iry).powi(2)
                    } else {
                        f32::INFINITY
                    };
                    if inner > 1.0 {
                        self.put(x, y, colour);
                    }
                }
            }
        }
    }

    /// Alpha-over compositing of `foreground` onto `background`.
    ///
    /// Produces a new canvas; both inputs are unchanged. The canvases must
    /// have identical dimensions.
    pub fn composite_over(background: &Canvas, foreground: &Canvas) -> Result<Canvas> {
        if background.width != foreground.width || background.height != foreground.height {
            return Err(IconError::InvalidDimension {
                width: foreground.width,
                height: foreground.height,
            });
        }

        let pixels = background
            .pixels
            .iter()
            .zip(&foreground.pixels)
            .map(|(bg_row, fg_row)| {
                bg_row
                    .iter()
                    .zip(fg_row)
                    .map(|(&bg, &fg)| fg.over(bg))
                    .collect()
            })
            .collect();

        Ok(Canvas {
            width: background.width,
            height: background.height,
            pixels,
        })
    }
}

/// Distance from a point to a line segment.
fn segment_distance(px: f32, py: f32, a: Point, b: Point) -> f32 {
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (bx, by) = (b.x as f32, b.y as f32);
    let (dx, dy) = (bx - ax, by - ay);

    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let (nx, ny) = (ax + t * dx, ay + t * dy);
    ((px - nx).powi(2) + (py - ny).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_fully_transparent() {
        let canvas = Canvas::new(8).unwrap();
        let mut count = 0;
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(canvas.get(x, y), Some(Colour::TRANSPARENT));
                count += 1;
            }
        }
        assert_eq!(count, 64);
    }

    #[test]
    fn test_new_zero_fails() {
        assert!(matches!(
            Canvas::new(0),
            Err(IconError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_set_pixel_overwrites() {
        let mut canvas = Canvas::new(4).unwrap();
        let semi = Colour::new(10, 20, 30, 128);
        canvas.set_pixel(Point::new(1, 2), Colour::WHITE).unwrap();
        canvas.set_pixel(Point::new(1, 2), semi).unwrap();
        // Overwrite, not blend
        assert_eq!(canvas.get(1, 2), Some(semi));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut canvas = Canvas::new(4).unwrap();
        for p in [
            Point::new(4, 0),
            Point::new(0, 4),
            Point::new(-1, 0),
            Point::new(0, -1),
        ] {
            assert!(matches!(
                canvas.set_pixel(p, Colour::BLACK),
                Err(IconError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn test_draw_line_is_symmetric() {
        let p0 = Point::new(2, 3);
        let p1 = Point::new(25, 18);

        let mut a = Canvas::new(32).unwrap();
        a.draw_line(p0, p1, Colour::BLACK, 4);

        let mut b = Canvas::new(32).unwrap();
        b.draw_line(p1, p0, Colour::BLACK, 4);

        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_line_covers_endpoints() {
        let mut canvas = Canvas::new(16).unwrap();
        canvas.draw_line(Point::new(2, 8), Point::new(13, 8), Colour::BLACK, 3);
        assert_eq!(canvas.get(2, 8), Some(Colour::BLACK));
        assert_eq!(canvas.get(13, 8), Some(Colour::BLACK));
        assert_eq!(canvas.get(7, 8), Some(Colour::BLACK));
        // Well away from the stroke stays transparent
        assert_eq!(canvas.get(7, 1), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_draw_line_clips_at_edges() {
        let mut canvas = Canvas::new(8).unwrap();
        // Endpoints far outside the canvas must not panic
        canvas.draw_line(Point::new(-20, 4), Point::new(30, 4), Colour::BLACK, 2);
        assert_eq!(canvas.get(0, 4), Some(Colour::BLACK));
        assert_eq!(canvas.get(7, 4), Some(Colour::BLACK));
    }

    #[test]
    fn test_draw_ellipse_filled() {
        let mut canvas = Canvas::new(20).unwrap();
        canvas.draw_ellipse(Rect::new(2, 2, 17, 17), Colour::WHITE, true);

        // Centre is inside
        assert_eq!(canvas.get(10, 10), Some(Colour::WHITE));
        // Corners of the bbox are outside the inscribed ellipse
        assert_eq!(canvas.get(2, 2), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(17, 17), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_draw_ellipse_outline_has_hollow_centre() {
        let mut canvas = Canvas::new(20).unwrap();
        canvas.draw_ellipse(Rect::new(2, 2, 17, 17), Colour::WHITE, false);

        assert_eq!(canvas.get(10, 10), Some(Colour::TRANSPARENT));
        // The ring passes through the horizontal extremes
        assert_eq!(canvas.get(2, 10), Some(Colour::WHITE));
        assert_eq!(canvas.get(17, 10), Some(Colour::WHITE));
    }

    #[test]
    fn test_draw_ellipse_clips_at_edges() {
        let mut canvas = Canvas::new(8).unwrap();
        canvas.draw_ellipse(Rect::new(-4, -4, 11, 11), Colour::BLACK, true);
        assert_eq!(canvas.get(3, 3), Some(Colour::BLACK));
    }

    #[test]
    fn test_composite_over_transparent_fg_is_noop() {
        let mut bg = Canvas::new(6).unwrap();
        bg.fill_with(|x, y| Colour::rgb((x * 40) as u8, (y * 40) as u8, 7));
        let fg = Canvas::new(6).unwrap();

        let out = Canvas::composite_over(&bg, &fg).unwrap();
        assert_eq!(out, bg);
    }

    #[test]
    fn test_composite_over_opaque_fg_wins() {
        let mut bg = Canvas::new(4).unwrap();
        bg.fill_with(|_, _| Colour::WHITE);
        let mut fg = Canvas::new(4).unwrap();
        fg.set_pixel(Point::new(1, 1), Colour::BLACK).unwrap();

        let out = Canvas::composite_over(&bg, &fg).unwrap();
        assert_eq!(out.get(1, 1), Some(Colour::BLACK));
        assert_eq!(out.get(0, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_composite_over_leaves_inputs_unchanged() {
        let mut bg = Canvas::new(4).unwrap();
        bg.fill_with(|_, _| Colour::rgb(9, 9, 9));
        let mut fg = Canvas::new(4).unwrap();
        fg.fill_with(|_, _| Colour::new(0, 0, 0, 100));

        let bg_before = bg.clone();
        let fg_before = fg.clone();
        let _ = Canvas::composite_over(&bg, &fg).unwrap();
        assert_eq!(bg, bg_before);
        assert_eq!(fg, fg_before);
    }

    #[test]
    fn test_composite_over_dimension_mismatch() {
        let bg = Canvas::new(4).unwrap();
        let fg = Canvas::new(5).unwrap();
        assert!(matches!(
            Canvas::composite_over(&bg, &fg),
            Err(IconError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_rgba_image_round_trip() {
        let mut canvas = Canvas::new(3).unwrap();
        canvas.fill_with(|x, y| Colour::new(x as u8 * 50, y as u8 * 50, 77, 200));

        let img = canvas.to_rgba_image();
        assert_eq!(img.dimensions(), (3, 3));
        assert_eq!(Canvas::from_rgba_image(&img), canvas);
    }
}
