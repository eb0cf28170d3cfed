// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, wiring the upload form, the crop session, the
//! background decode/submit channels, and the shared UI state together.

use crate::io::media::{self, LoadedImage};
use crate::models::crop::CropHandle;
use crate::models::form::UploadForm;
use crate::models::session::UploadSession;
use crate::net::submit::{self, SubmitOutcome};
use crate::ui::state::{ConfirmAction, UiState};
use crate::ui::{confirm, cropper, form_panel, overlay};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

pub const DEFAULT_UPLOAD_URL: &str = "http://localhost:8000/profile/image/upload";
pub const DEFAULT_DELETE_URL: &str = "http://localhost:8000/profile/image/delete";

/// Main application state.
pub struct CropPostApp {
    /// The one upload form on screen
    form: UploadForm,

    /// Preview and crop-engine lifecycle
    session: UploadSession,

    /// Loader, confirmation modal, and notice banner
    ui_state: UiState,

    /// Decoded preview texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Crop handle grabbed by the current pointer drag
    drag_handle: Option<CropHandle>,

    /// Receiver for the in-flight background decode
    decode_rx: Option<Receiver<(u64, Result<LoadedImage, String>)>>,

    /// Receiver for the in-flight submission
    submit_rx: Option<Receiver<SubmitOutcome>>,

    /// Loading state message while decoding
    loading_message: Option<String>,

    /// Endpoint opened by the confirm-then-delete flow
    delete_url: String,
}

impl CropPostApp {
    /// Create a new CropPost application instance.
    pub fn new(upload_url: String, delete_url: String) -> Self {
        Self {
            form: UploadForm::new("profile-image-form", upload_url)
                .with_field("caption", "Caption", ""),
            session: UploadSession::new(),
            ui_state: UiState::new(),
            image_texture: None,
            drag_handle: None,
            decode_rx: None,
            submit_rx: None,
            loading_message: None,
            delete_url,
        }
    }

    /// Adopt a file as the upload and start decoding a preview for it.
    ///
    /// Both the file picker and the drop zone land here, so the two paths
    /// produce identical state.
    pub fn choose_file(&mut self, path: PathBuf) {
        if !media::is_supported(&path) {
            log::info!("Ignoring non-image file: {}", path.display());
            return;
        }

        self.form.attach(path.clone());

        let token = self.session.begin_decode();
        let (sender, receiver) = channel();
        self.decode_rx = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        // Spawn background thread for decoding
        std::thread::spawn(move || {
            let result = media::load_image(&path).map_err(|e| e.to_string());
            let _ = sender.send((token, result));
        });
    }

    /// Start a submission: loader first, then crop serialization, then the
    /// network thread.
    fn begin_submit(&mut self) {
        // The loader must be visible before any asynchronous work starts
        self.ui_state.show_loader();

        if let Err(e) = self.form.apply_crop(self.session.engine()) {
            log::error!("Failed to serialize crop region: {e}");
        }

        self.submit_rx = Some(submit::submit_in_background(self.form.payload()));
    }

    /// React to the server's verdict on a submission.
    fn handle_submit_outcome(&mut self, outcome: SubmitOutcome) {
        self.ui_state.hide_loader();
        match outcome {
            SubmitOutcome::Accepted(message) => {
                self.ui_state
                    .notify_info(message.unwrap_or_else(|| "Image updated!".to_string()));
                self.reset();
            }
            SubmitOutcome::Rejected(message) => {
                // Form stays on screen, unchanged and resubmittable
                self.ui_state.notify_error(message);
            }
            SubmitOutcome::Failed(_) => {
                self.ui_state
                    .notify_error("Upload failed. Please try again.");
            }
        }
    }

    /// Run a confirmed modal action.
    fn execute_confirm(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::Navigate(url) => {
                log::info!("Opening {url}");
                if let Err(e) = open::that(&url) {
                    log::error!("Failed to open {url}: {e}");
                    self.ui_state.notify_error("Could not open the link.");
                }
            }
            ConfirmAction::SubmitForm(id) => {
                if id == self.form.id {
                    self.begin_submit();
                } else {
                    log::warn!("No form with id {id:?}");
                }
            }
        }
    }

    /// Return to the initial state, the way a page reload would.
    fn reset(&mut self) {
        self.form.reset();
        self.session.clear();
        self.image_texture = None;
        self.drag_handle = None;
        self.decode_rx = None;
        self.loading_message = None;
    }
}

impl eframe::App for CropPostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed image decoding
        if let Some(ref receiver) = self.decode_rx {
            if let Ok((token, result)) = receiver.try_recv() {
                self.decode_rx = None;
                self.loading_message = None;

                match result {
                    Ok(loaded) => {
                        if self.session.complete_decode(token, loaded.width, loaded.height) {
                            let size = [loaded.width as usize, loaded.height as usize];
                            let color_image =
                                egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                            self.image_texture = Some(ctx.load_texture(
                                "preview",
                                color_image,
                                egui::TextureOptions::LINEAR,
                            ));
                            log::info!("Preview ready ({}x{})", loaded.width, loaded.height);
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to load image: {e}");
                        self.ui_state.notify_error(format!("Could not load image: {e}"));
                    }
                }
            }
        }

        // Check for a completed submission
        if let Some(ref receiver) = self.submit_rx {
            if let Ok(outcome) = receiver.try_recv() {
                self.submit_rx = None;
                self.handle_submit_outcome(outcome);
            }
        }

        // Request repaint while background work is pending
        if self.loading_message.is_some() || self.submit_rx.is_some() {
            ctx.request_repaint();
        }

        // Drag-and-drop: hovering files mark the drop target, dropping one
        // adopts it exactly like a manual pick
        let drop_active = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.first() {
            if let Some(path) = &file.path {
                self.choose_file(path.clone());
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", media::SUPPORTED_EXTENSIONS)
                            .pick_file()
                        {
                            self.choose_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Upload form panel (right side)
        let form_action = egui::SidePanel::right("upload_form")
            .default_width(250.0)
            .show(ctx, |ui| {
                form_panel::show(ui, &mut self.form, self.session.cropper().is_some())
            })
            .inner;

        match form_action {
            form_panel::FormAction::PickFile => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", media::SUPPORTED_EXTENSIONS)
                    .pick_file()
                {
                    self.choose_file(path);
                }
            }
            form_panel::FormAction::ConfirmSubmit => {
                self.ui_state.confirm_save(self.form.id.clone());
            }
            form_panel::FormAction::ConfirmDelete => {
                self.ui_state.confirm_delete(self.delete_url.clone());
            }
            form_panel::FormAction::None => {}
        }

        // Preview canvas (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref message) = self.loading_message {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(message)
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                });
            } else {
                cropper::show(
                    ui,
                    &self.image_texture,
                    self.session.cropper_mut(),
                    &mut self.drag_handle,
                    drop_active,
                );
            }
        });

        // Confirmation modal
        if let Some(action) = confirm::show(ctx, &mut self.ui_state) {
            self.execute_confirm(action);
        }

        // Notice banner and loader overlay on top of everything
        overlay::show_notice(ctx, &mut self.ui_state);
        overlay::show_loader(ctx, &self.ui_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::NoticeLevel;

    fn test_app() -> CropPostApp {
        CropPostApp::new(
            "http://localhost:1/upload".to_string(),
            "http://localhost:1/delete".to_string(),
        )
    }

    #[test]
    fn test_begin_submit_shows_loader_synchronously() {
        let mut app = test_app();
        app.begin_submit();
        assert!(app.ui_state.loader_visible());
    }

    #[test]
    fn test_accepted_outcome_acknowledges_and_resets() {
        let mut app = test_app();
        app.form.attach(PathBuf::from("/tmp/a.png"));
        app.begin_submit();

        app.handle_submit_outcome(SubmitOutcome::Accepted(None));

        assert!(!app.ui_state.loader_visible());
        let notice = app.ui_state.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.text, "Image updated!");
        // Reset: the form is back to pristine state
        assert!(app.form.attachment().is_none());
    }

    #[test]
    fn test_rejected_outcome_shows_message_and_keeps_form() {
        let mut app = test_app();
        app.form.attach(PathBuf::from("/tmp/a.png"));
        app.form.fields_mut()[0].value = "holiday".to_string();
        app.begin_submit();

        app.handle_submit_outcome(SubmitOutcome::Rejected("Image too large".to_string()));

        assert!(!app.ui_state.loader_visible());
        let notice = app.ui_state.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "Image too large");
        // Form is untouched and resubmittable
        assert!(app.form.attachment().is_some());
        assert_eq!(app.form.fields_mut()[0].value, "holiday");
    }

    #[test]
    fn test_failed_outcome_uses_generic_notice() {
        let mut app = test_app();
        app.begin_submit();
        app.handle_submit_outcome(SubmitOutcome::Failed("connection refused".to_string()));
        assert!(!app.ui_state.loader_visible());
        assert_eq!(app.ui_state.notice().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_confirmed_submit_targets_form_by_id() {
        let mut app = test_app();
        app.execute_confirm(ConfirmAction::SubmitForm("profile-image-form".to_string()));
        assert!(app.ui_state.loader_visible());

        let mut other = test_app();
        other.execute_confirm(ConfirmAction::SubmitForm("otherForm".to_string()));
        assert!(!other.ui_state.loader_visible());
    }

    #[test]
    fn test_choose_file_adopts_attachment() {
        let mut app = test_app();
        app.choose_file(PathBuf::from("/tmp/photos/avatar.png"));
        assert_eq!(app.form.attachment().unwrap().file_name, "avatar.png");
        assert!(app.decode_rx.is_some());
    }

    #[test]
    fn test_choose_file_ignores_unsupported_payload() {
        let mut app = test_app();
        app.choose_file(PathBuf::from("/tmp/notes.txt"));
        assert!(app.form.attachment().is_none());
        assert!(app.decode_rx.is_none());
    }
}
