// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading.
//!
//! This module handles loading image files and converting them to RGBA
//! pixel buffers suitable for display as egui textures.

use anyhow::{Context, Result};
use std::path::Path;

/// File extensions accepted by the picker and the drop zone.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

/// A decoded image ready to become a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Whether a path looks like an image we can preview.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Load and decode an image file into RGBA8 pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_supported_by_extension() {
        assert!(is_supported(&PathBuf::from("photo.JPG")));
        assert!(is_supported(&PathBuf::from("/a/b/photo.png")));
        assert!(!is_supported(&PathBuf::from("notes.txt")));
        assert!(!is_supported(&PathBuf::from("no_extension")));
    }

    #[test]
    fn test_load_image_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");

        let buffer = image::RgbaImage::from_pixel(4, 3, image::Rgba([255, 0, 0, 255]));
        buffer.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.width, 4);
        assert_eq!(loaded.height, 3);
        assert_eq!(loaded.pixels.len(), 4 * 3 * 4);
        assert_eq!(&loaded.pixels[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(&PathBuf::from("/definitely/not/here.png"));
        assert!(result.is_err());
    }
}
