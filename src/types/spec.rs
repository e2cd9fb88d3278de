//! The platform size catalogue and variant naming rules.
//!
//! A `SizeSpec` is one row of the asset-catalog table: a logical size in
//! points and a pixel-density multiplier. Everything the manifest needs
//! (filename, idiom, labels) derives deterministically from that pair.

use std::fmt;

/// Device class an icon variant is declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Idiom {
    Phone,
    Tablet,
    Marketing,
}

impl Idiom {
    /// The string the asset catalog expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Idiom::Phone => "iphone",
            Idiom::Tablet => "ipad",
            Idiom::Marketing => "ios-marketing",
        }
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One required icon size: logical points plus a scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    /// Logical size in points (83.5 is the only fractional entry).
    pub points: f32,
    /// Pixel density multiplier; the catalogue only uses 1, 2, and 3.
    pub scale: u32,
}

impl SizeSpec {
    pub const fn new(points: f32, scale: u32) -> Self {
        Self { points, scale }
    }

    /// Actual raster edge length in pixels.
    pub fn pixels(&self) -> u32 {
        (self.points * self.scale as f32).round() as u32
    }

    /// Device class per the asset-catalog rules.
    ///
    /// 1024 is the store/marketing art; 76 and 83.5 only exist on tablets;
    /// the small sizes (20/29/40) are tablet-only at 1x and phone otherwise.
    pub fn idiom(&self) -> Idiom {
        if self.points == 1024.0 {
            Idiom::Marketing
        } else if self.points == 76.0 || self.points == 83.5 {
            Idiom::Tablet
        } else if [20.0, 29.0, 40.0].contains(&self.points) && self.scale == 1 {
            Idiom::Tablet
        } else {
            Idiom::Phone
        }
    }

    /// Canonical output filename, e.g. `icon-83.5@2x.png`.
    ///
    /// The marketing size is pinned to `@1x` no matter how its scale is
    /// recorded in the table.
    pub fn filename(&self) -> String {
        if self.points == 1024.0 {
            "icon-1024@1x.png".to_string()
        } else {
            format!("icon-{}@{}x.png", format_points(self.points), self.scale)
        }
    }

    /// Manifest `size` field, e.g. `"20x20"` or `"83.5x83.5"`.
    pub fn size_label(&self) -> String {
        let p = format_points(self.points);
        format!("{p}x{p}")
    }

    /// Manifest `scale` field, e.g. `"2x"`.
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

/// Render logical points without a trailing `.0` for whole values.
fn format_points(points: f32) -> String {
    if points.fract() == 0.0 {
        format!("{}", points as u32)
    } else {
        format!("{}", points)
    }
}

/// Everything the manifest records about one produced variant.
///
/// Derived once from a `SizeSpec`, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDescriptor {
    pub filename: String,
    pub idiom: Idiom,
    pub scale: u32,
    pub points: f32,
}

impl VariantDescriptor {
    pub fn from_spec(spec: &SizeSpec) -> Self {
        Self {
            filename: spec.filename(),
            idiom: spec.idiom(),
            scale: spec.scale,
            points: spec.points,
        }
    }

    /// Manifest `size` field.
    pub fn size_label(&self) -> String {
        let p = format_points(self.points);
        format!("{p}x{p}")
    }

    /// Manifest `scale` field.
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

/// The required iOS icon sizes, in manifest declaration order.
///
/// Phone notification/settings/spotlight/app at 2x and 3x, the tablet 1x
/// set, tablet app sizes, the tablet-pro size, and the store art.
pub const IOS_SIZES: [SizeSpec; 15] = [
    SizeSpec::new(20.0, 2),
    SizeSpec::new(20.0, 3),
    SizeSpec::new(29.0, 2),
    SizeSpec::new(29.0, 3),
    SizeSpec::new(40.0, 2),
    SizeSpec::new(40.0, 3),
    SizeSpec::new(60.0, 2),
    SizeSpec::new(60.0, 3),
    SizeSpec::new(20.0, 1),
    SizeSpec::new(29.0, 1),
    SizeSpec::new(40.0, 1),
    SizeSpec::new(76.0, 1),
    SizeSpec::new(76.0, 2),
    SizeSpec::new(83.5, 2),
    SizeSpec::new(1024.0, 1),
];
