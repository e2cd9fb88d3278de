//! Asset-catalog manifest accumulation and serialization.
//!
//! The builder receives one descriptor per produced variant and refuses to
//! finalize unless the count matches what the resampler was asked for, so a
//! manifest can never reference files that were not produced.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{IconError, Result};
use crate::types::VariantDescriptor;

/// Name of the manifest file inside the icon set directory.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// The `info.author` constant the packaging toolchain expects.
const AUTHOR: &str = "xcode";

/// Manifest format version.
const FORMAT_VERSION: u32 = 1;

/// A finalized, write-only manifest.
#[derive(Debug, Serialize, PartialEq)]
pub struct Manifest {
    images: Vec<ImageEntry>,
    info: Info,
}

#[derive(Debug, Serialize, PartialEq)]
struct ImageEntry {
    filename: String,
    idiom: String,
    scale: String,
    size: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct Info {
    author: String,
    version: u32,
}

impl Manifest {
    /// Number of image entries.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageEntry {
    fn from_descriptor(descriptor: &VariantDescriptor) -> Self {
        Self {
            filename: descriptor.filename.clone(),
            idiom: descriptor.idiom.as_str().to_string(),
            scale: descriptor.scale_label(),
            size: descriptor.size_label(),
        }
    }
}

/// Accumulates descriptors in production order.
#[derive(Debug)]
pub struct ManifestBuilder {
    expected: usize,
    images: Vec<ImageEntry>,
}

impl ManifestBuilder {
    /// Create a builder expecting exactly `expected` descriptors.
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            images: Vec::with_capacity(expected),
        }
    }

    /// Append one variant descriptor; order is preserved.
    pub fn push(&mut self, descriptor: &VariantDescriptor) {
        self.images.push(ImageEntry::from_descriptor(descriptor));
    }

    /// Number of descriptors accumulated so far.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Finalize into a manifest.
    ///
    /// An entry-count mismatch is a pipeline bug, not a recoverable
    /// condition; it must surface before anything is written.
    pub fn finalize(self) -> Result<Manifest> {
        if self.images.len() != self.expected {
            return Err(IconError::ManifestCountMismatch {
                expected: self.expected,
                actual: self.images.len(),
            });
        }
        Ok(Manifest {
            images: self.images,
            info: Info {
                author: AUTHOR.to_string(),
                version: FORMAT_VERSION,
            },
        })
    }
}

/// Serialize a finalized manifest to disk.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to serialize manifest: {}", e),
    })?;
    fs::write(path, json).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write manifest: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SizeSpec, IOS_SIZES};
    use pretty_assertions::assert_eq;

    fn descriptor(points: f32, scale: u32) -> VariantDescriptor {
        VariantDescriptor::from_spec(&SizeSpec::new(points, scale))
    }

    #[test]
    fn test_finalize_with_matching_count() {
        let mut builder = ManifestBuilder::new(2);
        builder.push(&descriptor(20.0, 2));
        builder.push(&descriptor(1024.0, 1));

        let manifest = builder.finalize().unwrap();
        assert_eq!(manifest.len(), 2);
    }

    #[test]
    fn test_finalize_too_few_entries_fails() {
        let mut builder = ManifestBuilder::new(3);
        builder.push(&descriptor(20.0, 2));

        let err = builder.finalize().unwrap_err();
        assert!(matches!(
            err,
            IconError::ManifestCountMismatch {
                expected: 3,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_finalize_too_many_entries_fails() {
        let mut builder = ManifestBuilder::new(1);
        builder.push(&descriptor(20.0, 2));
        builder.push(&descriptor(29.0, 2));

        assert!(builder.finalize().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let mut builder = ManifestBuilder::new(2);
        builder.push(&descriptor(83.5, 2));
        builder.push(&descriptor(1024.0, 1));
        let manifest = builder.finalize().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&manifest).unwrap()).unwrap();

        assert_eq!(value["info"]["author"], "xcode");
        assert_eq!(value["info"]["version"], 1);
        assert_eq!(value["images"].as_array().unwrap().len(), 2);
        assert_eq!(value["images"][0]["filename"], "icon-83.5@2x.png");
        assert_eq!(value["images"][0]["idiom"], "ipad");
        assert_eq!(value["images"][0]["scale"], "2x");
        assert_eq!(value["images"][0]["size"], "83.5x83.5");
        assert_eq!(value["images"][1]["idiom"], "ios-marketing");
        assert_eq!(value["images"][1]["size"], "1024x1024");
    }

    #[test]
    fn test_entries_preserve_push_order() {
        let mut builder = ManifestBuilder::new(IOS_SIZES.len());
        for spec in &IOS_SIZES {
            builder.push(&VariantDescriptor::from_spec(spec));
        }
        let manifest = builder.finalize().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&manifest).unwrap()).unwrap();
        let filenames: Vec<&str> = value["images"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["filename"].as_str().unwrap())
            .collect();
        let expected: Vec<String> = IOS_SIZES.iter().map(|s| s.filename()).collect();
        assert_eq!(filenames, expected);
    }

    #[test]
    fn test_write_manifest() {
        let mut builder = ManifestBuilder::new(1);
        builder.push(&descriptor(60.0, 3));
        let manifest = builder.finalize().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        write_manifest(&manifest, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["images"][0]["filename"], "icon-60@3x.png");
        assert_eq!(value["images"][0]["idiom"], "iphone");
    }
}
