// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the CropPost application.

pub mod confirm;
pub mod cropper;
pub mod form_panel;
pub mod overlay;
pub mod state;
