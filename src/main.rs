// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! CropPost - Image crop and upload client
//!
//! A cross-platform desktop application for selecting an image, choosing
//! a square crop region on a live preview, and uploading it with its form
//! fields to a web endpoint as multipart data.

mod app;
mod io;
mod models;
mod net;
mod ui;
mod util;

use anyhow::Result;
use app::CropPostApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Endpoints can be overridden on the command line
    let mut args = std::env::args().skip(1);
    let upload_url = args
        .next()
        .unwrap_or_else(|| app::DEFAULT_UPLOAD_URL.to_string());
    let delete_url = args
        .next()
        .unwrap_or_else(|| app::DEFAULT_DELETE_URL.to_string());

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 680.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("CropPost - Image Crop & Upload")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "CropPost",
        options,
        Box::new(move |_cc| Ok(Box::new(CropPostApp::new(upload_url, delete_url)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
