// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Crop region data structures and the interactive crop selection.
//!
//! This module defines the crop rectangle sent to the server, the narrow
//! interface the rest of the application uses to read it, and the
//! concrete square cropper manipulated on the preview canvas.

use crate::util::geometry::{self, NormRect};
use serde::{Deserialize, Serialize};

/// Minimum crop side length in image pixels.
const MIN_SIDE_PX: f64 = 16.0;

/// A crop rectangle in image-pixel coordinates.
///
/// Field order matters: the serialized JSON is passed through to the
/// upload endpoint as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotate: f64,
}

/// Narrow interface over the crop selection.
///
/// The form only needs to read the current region; keeping this as a
/// trait lets tests substitute a fake engine and keeps the interactive
/// cropper swappable. Destruction is handled by `Drop`.
pub trait CropEngine {
    fn region(&self) -> CropRegion;
}

/// Which part of the crop rectangle a pointer drag manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropHandle {
    Move,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Interactive crop selection locked to a 1:1 aspect ratio in pixel space.
///
/// The rectangle is stored in normalized coordinates relative to the
/// image; all mutations keep it square (in pixels) and inside the image.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCropper {
    image_width: u32,
    image_height: u32,
    rect: NormRect,
}

impl RectCropper {
    /// Create a cropper for an image, starting with the largest centered
    /// square selection.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            rect: geometry::centered_square(image_width, image_height),
        }
    }

    pub fn rect(&self) -> NormRect {
        self.rect
    }

    pub fn image_size(&self) -> (u32, u32) {
        (self.image_width, self.image_height)
    }

    /// Apply a pointer drag, with the delta in normalized coordinates.
    pub fn drag(&mut self, handle: CropHandle, dx: f64, dy: f64) {
        match handle {
            CropHandle::Move => {
                self.rect = self.rect.translate_clamped(dx, dy);
            }
            _ => self.drag_corner(handle, dx, dy),
        }
    }

    /// Resize from a corner, keeping the selection square in pixel space.
    ///
    /// The dragged corner's raw width/height suggestion is projected onto
    /// the square diagonal (average of the two), then clamped to the room
    /// left between the anchor corner and the image edges.
    fn drag_corner(&mut self, handle: CropHandle, dx: f64, dy: f64) {
        let w = self.image_width as f64;
        let h = self.image_height as f64;

        // Anchor is the opposite corner (fixed); sx/sy point from the
        // anchor toward the dragged corner.
        let (ax, ay, sx, sy) = match handle {
            CropHandle::TopLeft => (self.rect.max_x * w, self.rect.max_y * h, -1.0, -1.0),
            CropHandle::TopRight => (self.rect.min_x * w, self.rect.max_y * h, 1.0, -1.0),
            CropHandle::BottomLeft => (self.rect.max_x * w, self.rect.min_y * h, -1.0, 1.0),
            CropHandle::BottomRight => (self.rect.min_x * w, self.rect.min_y * h, 1.0, 1.0),
            CropHandle::Move => return,
        };

        let cx = ax + sx * self.rect.width() * w + dx * w;
        let cy = ay + sy * self.rect.height() * h + dy * h;

        // Signed distance along the drag direction, so a drag past the
        // anchor shrinks toward the minimum instead of flipping.
        let raw_w = (cx - ax) * sx;
        let raw_h = (cy - ay) * sy;
        let mut side = (raw_w + raw_h) / 2.0;

        let avail_x = if sx > 0.0 { w - ax } else { ax };
        let avail_y = if sy > 0.0 { h - ay } else { ay };
        let max_side = avail_x.min(avail_y);
        side = side.clamp(MIN_SIDE_PX.min(max_side), max_side);

        let nx = ax + sx * side;
        let ny = ay + sy * side;

        self.rect = NormRect {
            min_x: geometry::clamp_unit(ax.min(nx) / w),
            min_y: geometry::clamp_unit(ay.min(ny) / h),
            max_x: geometry::clamp_unit(ax.max(nx) / w),
            max_y: geometry::clamp_unit(ay.max(ny) / h),
        };
    }
}

impl CropEngine for RectCropper {
    fn region(&self) -> CropRegion {
        let (x, y, width, height) =
            geometry::denormalize_rect(&self.rect, self.image_width, self.image_height);
        CropRegion {
            x,
            y,
            width,
            height,
            rotate: 0.0,
        }
    }
}
