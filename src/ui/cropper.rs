// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview canvas with crop selection.
//!
//! This module renders the image preview area: the decoded image fit to
//! the panel, the dimmed surround, the square crop selection with its
//! drag handles, and the drop-zone states (welcome screen, active drop
//! marker).

use crate::models::crop::{CropHandle, RectCropper};

/// Distance in points within which a corner handle is grabbed.
const HANDLE_TOLERANCE: f32 = 10.0;

/// Display the preview canvas and route pointer drags into the cropper.
///
/// `drag_handle` carries the handle grabbed at drag start across frames;
/// the app owns it alongside the rest of the interaction state.
pub fn show(
    ui: &mut egui::Ui,
    image_texture: &Option<egui::TextureHandle>,
    cropper: Option<&mut RectCropper>,
    drag_handle: &mut Option<CropHandle>,
    drop_active: bool,
) {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);
        let canvas_rect = egui::Rect::from_min_size(ui.min_rect().min, available_size);

        if let Some(texture) = image_texture {
            let image_rect = fit_image_rect(ui, texture.size_vec2());

            ui.painter().image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            if let Some(cropper) = cropper {
                interact_and_draw(ui, cropper, drag_handle, image_rect);
            }
        } else {
            // Welcome message when no image is chosen
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.heading(
                        egui::RichText::new("CropPost")
                            .size(32.0)
                            .color(egui::Color32::from_gray(200)),
                    );
                    ui.label(
                        egui::RichText::new("Crop an image and upload it")
                            .size(14.0)
                            .color(egui::Color32::from_gray(150)),
                    );
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("Drop an image here to begin")
                            .color(egui::Color32::from_gray(180)),
                    );
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new("File → Open Image...")
                            .weak()
                            .color(egui::Color32::from_gray(130)),
                    );
                });
            });
        }

        // Active drop target marker while files hover the window
        if drop_active {
            let painter = ui.painter();
            painter.rect_filled(
                canvas_rect,
                4.0,
                egui::Color32::from_rgba_unmultiplied(70, 130, 220, 40),
            );
            painter.rect_stroke(
                canvas_rect.shrink(2.0),
                4.0,
                egui::Stroke::new(2.0, egui::Color32::from_rgb(110, 170, 255)),
            );
            painter.text(
                canvas_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Drop image to upload",
                egui::FontId::proportional(18.0),
                egui::Color32::from_rgb(110, 170, 255),
            );
        }
    });
}

/// Fit the image into the available panel space, centered.
fn fit_image_rect(ui: &egui::Ui, image_size: egui::Vec2) -> egui::Rect {
    let available = ui.available_size();
    let img_aspect = image_size.x / image_size.y;
    let available_aspect = available.x / available.y;

    let (display_width, display_height) = if img_aspect > available_aspect {
        // Image is wider - fit to width
        let width = available.x;
        (width, width / img_aspect)
    } else {
        // Image is taller - fit to height
        let height = available.y;
        (height * img_aspect, height)
    };

    let x_offset = (available.x - display_width) / 2.0;
    let y_offset = (available.y - display_height) / 2.0;

    egui::Rect::from_min_size(
        ui.min_rect().min + egui::vec2(x_offset, y_offset),
        egui::vec2(display_width, display_height),
    )
}

/// Handle crop-selection drags and paint the selection chrome.
fn interact_and_draw(
    ui: &mut egui::Ui,
    cropper: &mut RectCropper,
    drag_handle: &mut Option<CropHandle>,
    image_rect: egui::Rect,
) {
    let response = ui.allocate_rect(image_rect, egui::Sense::drag());

    let mut screen_rect = selection_screen_rect(cropper, image_rect);

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            *drag_handle = hit_test(pos, screen_rect);
        }
    }

    if response.dragged() {
        if let Some(handle) = *drag_handle {
            let delta = response.drag_delta();
            cropper.drag(
                handle,
                (delta.x / image_rect.width()) as f64,
                (delta.y / image_rect.height()) as f64,
            );
            screen_rect = selection_screen_rect(cropper, image_rect);
        }
    }

    if response.drag_stopped() {
        *drag_handle = None;
    }

    let painter = ui.painter_at(image_rect);

    // Dim everything outside the selection
    let dim = egui::Color32::from_black_alpha(150);
    painter.rect_filled(
        egui::Rect::from_min_max(
            image_rect.min,
            egui::pos2(image_rect.max.x, screen_rect.min.y),
        ),
        0.0,
        dim,
    );
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(image_rect.min.x, screen_rect.max.y),
            image_rect.max,
        ),
        0.0,
        dim,
    );
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(image_rect.min.x, screen_rect.min.y),
            egui::pos2(screen_rect.min.x, screen_rect.max.y),
        ),
        0.0,
        dim,
    );
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(screen_rect.max.x, screen_rect.min.y),
            egui::pos2(image_rect.max.x, screen_rect.max.y),
        ),
        0.0,
        dim,
    );

    painter.rect_stroke(screen_rect, 0.0, egui::Stroke::new(1.0, egui::Color32::WHITE));

    // Corner handles
    for pos in [
        screen_rect.min,
        egui::pos2(screen_rect.max.x, screen_rect.min.y),
        egui::pos2(screen_rect.min.x, screen_rect.max.y),
        screen_rect.max,
    ] {
        painter.circle(
            pos,
            5.0,
            egui::Color32::WHITE,
            egui::Stroke::new(1.0, egui::Color32::BLACK),
        );
    }
}

/// Convert the cropper's normalized selection to screen coordinates.
fn selection_screen_rect(cropper: &RectCropper, image_rect: egui::Rect) -> egui::Rect {
    let rect = cropper.rect();
    egui::Rect::from_min_max(
        egui::pos2(
            image_rect.min.x + rect.min_x as f32 * image_rect.width(),
            image_rect.min.y + rect.min_y as f32 * image_rect.height(),
        ),
        egui::pos2(
            image_rect.min.x + rect.max_x as f32 * image_rect.width(),
            image_rect.min.y + rect.max_y as f32 * image_rect.height(),
        ),
    )
}

/// Which handle, if any, a pointer position grabs.
fn hit_test(pos: egui::Pos2, rect: egui::Rect) -> Option<CropHandle> {
    if pos.distance(rect.min) < HANDLE_TOLERANCE {
        return Some(CropHandle::TopLeft);
    }
    if pos.distance(egui::pos2(rect.max.x, rect.min.y)) < HANDLE_TOLERANCE {
        return Some(CropHandle::TopRight);
    }
    if pos.distance(egui::pos2(rect.min.x, rect.max.y)) < HANDLE_TOLERANCE {
        return Some(CropHandle::BottomLeft);
    }
    if pos.distance(rect.max) < HANDLE_TOLERANCE {
        return Some(CropHandle::BottomRight);
    }
    if rect.contains(pos) {
        return Some(CropHandle::Move);
    }
    None
}
