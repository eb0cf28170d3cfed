// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for working with normalized rectangles
//! (coordinates in 0.0 to 1.0 relative to an image) and for converting
//! between normalized and pixel coordinates.

/// An axis-aligned rectangle in normalized image coordinates (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl NormRect {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Translate the rectangle, constraining the delta so the rectangle
    /// stays inside the unit square.
    pub fn translate_clamped(&self, mut dx: f64, mut dy: f64) -> NormRect {
        if self.min_x + dx < 0.0 {
            dx = -self.min_x;
        }
        if self.max_x + dx > 1.0 {
            dx = 1.0 - self.max_x;
        }
        if self.min_y + dy < 0.0 {
            dy = -self.min_y;
        }
        if self.max_y + dy > 1.0 {
            dy = 1.0 - self.max_y;
        }
        NormRect {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }
}

/// Clamp a value to the unit interval.
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Largest square (in pixel space) centered within an image of the given
/// dimensions, expressed as a normalized rectangle.
pub fn centered_square(width: u32, height: u32) -> NormRect {
    let w = width as f64;
    let h = height as f64;
    let side = w.min(h);
    let norm_w = side / w;
    let norm_h = side / h;
    NormRect {
        min_x: (1.0 - norm_w) / 2.0,
        min_y: (1.0 - norm_h) / 2.0,
        max_x: (1.0 + norm_w) / 2.0,
        max_y: (1.0 + norm_h) / 2.0,
    }
}

/// Convert a normalized rectangle to pixel coordinates.
pub fn denormalize_rect(rect: &NormRect, width: u32, height: u32) -> (f64, f64, f64, f64) {
    let w = width as f64;
    let h = height as f64;
    (
        rect.min_x * w,
        rect.min_y * h,
        rect.width() * w,
        rect.height() * h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_square_landscape() {
        let rect = centered_square(1920, 1080);
        let (x, y, w, h) = denormalize_rect(&rect, 1920, 1080);
        assert!((w - 1080.0).abs() < 0.0001);
        assert!((h - 1080.0).abs() < 0.0001);
        assert!((x - 420.0).abs() < 0.0001);
        assert!(y.abs() < 0.0001);
    }

    #[test]
    fn test_centered_square_portrait() {
        let rect = centered_square(600, 800);
        let (_, _, w, h) = denormalize_rect(&rect, 600, 800);
        assert!((w - 600.0).abs() < 0.0001);
        assert!((h - 600.0).abs() < 0.0001);
    }

    #[test]
    fn test_translate_clamped_stays_in_bounds() {
        let rect = NormRect {
            min_x: 0.25,
            min_y: 0.25,
            max_x: 0.75,
            max_y: 0.75,
        };

        // A huge delta is constrained so the rect ends flush with the edge
        let moved = rect.translate_clamped(10.0, -10.0);
        assert!((moved.max_x - 1.0).abs() < 0.0001);
        assert!(moved.min_y.abs() < 0.0001);

        // Size is preserved
        assert!((moved.width() - 0.5).abs() < 0.0001);
        assert!((moved.height() - 0.5).abs() < 0.0001);
    }
}
