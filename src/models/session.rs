// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Upload session lifecycle.
//!
//! Tracks the currently previewed image and its crop engine. Each file
//! selection takes a new generation token; a decode that completes with a
//! stale token is ignored, so a quick second selection supersedes the
//! first instead of racing it.

use crate::models::crop::{CropEngine, RectCropper};

/// State of the current upload: at most one live crop engine at a time.
pub struct UploadSession {
    generation: u64,
    cropper: Option<RectCropper>,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            generation: 0,
            cropper: None,
        }
    }

    /// Begin decoding a newly selected file. Returns the generation token
    /// the decode must present on completion.
    pub fn begin_decode(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a decode token still refers to the latest selection.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }

    /// Complete a decode. Installs a fresh crop engine for the image,
    /// replacing (and thereby destroying) any previous one. Returns false
    /// and changes nothing if the token is stale.
    pub fn complete_decode(&mut self, token: u64, width: u32, height: u32) -> bool {
        if !self.is_current(token) {
            log::info!("Ignoring stale decode (token {token}, current {})", self.generation);
            return false;
        }
        if self.cropper.is_some() {
            log::info!("Replacing crop selection for new image");
        }
        self.cropper = Some(RectCropper::new(width, height));
        true
    }

    pub fn cropper(&self) -> Option<&RectCropper> {
        self.cropper.as_ref()
    }

    pub fn cropper_mut(&mut self) -> Option<&mut RectCropper> {
        self.cropper.as_mut()
    }

    /// The engine behind its narrow interface, for crop serialization.
    pub fn engine(&self) -> Option<&dyn CropEngine> {
        self.cropper.as_ref().map(|c| c as &dyn CropEngine)
    }

    /// Drop the preview and crop engine, returning to the idle state.
    pub fn clear(&mut self) {
        self.cropper = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_engine_after_successive_selections() {
        let mut session = UploadSession::new();

        let token_a = session.begin_decode();
        assert!(session.complete_decode(token_a, 800, 600));
        let first = session.cropper().cloned();
        assert!(first.is_some());

        let token_b = session.begin_decode();
        assert!(session.complete_decode(token_b, 400, 400));

        // Exactly one engine, sized for the second image
        let cropper = session.cropper().expect("engine after second selection");
        assert_eq!(cropper.image_size(), (400, 400));
    }

    #[test]
    fn test_stale_decode_is_ignored() {
        let mut session = UploadSession::new();

        let token_a = session.begin_decode();
        let token_b = session.begin_decode();

        // B's decode finishes first and wins
        assert!(session.complete_decode(token_b, 400, 400));
        // A's late completion must not clobber B's engine
        assert!(!session.complete_decode(token_a, 800, 600));

        assert_eq!(session.cropper().unwrap().image_size(), (400, 400));
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let mut session = UploadSession::new();
        let token = session.begin_decode();
        session.complete_decode(token, 100, 100);
        session.clear();
        assert!(session.cropper().is_none());
        assert!(session.engine().is_none());
    }
}
