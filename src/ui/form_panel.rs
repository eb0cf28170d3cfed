// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Upload form side panel.
//!
//! Shows the form's text fields and attachment, and offers the picker,
//! upload, and delete entry points. Button presses are reported back as
//! actions for the app to handle.

use crate::models::form::UploadForm;

/// Result of form panel interaction.
pub enum FormAction {
    None,
    /// Open the native file picker.
    PickFile,
    /// Ask for confirmation, then submit the form.
    ConfirmSubmit,
    /// Ask for confirmation, then navigate to the delete endpoint.
    ConfirmDelete,
}

/// Display the form panel.
pub fn show(ui: &mut egui::Ui, form: &mut UploadForm, previewing: bool) -> FormAction {
    let mut action = FormAction::None;

    ui.heading("Upload");
    ui.separator();

    ui.label(egui::RichText::new("Image").strong());
    match form.attachment() {
        Some(attachment) => {
            ui.label(&attachment.file_name);
        }
        None => {
            ui.label(egui::RichText::new("No image chosen").weak().italics());
        }
    }
    if ui.button("Choose Image...").clicked() {
        action = FormAction::PickFile;
    }

    ui.add_space(8.0);
    ui.separator();

    for field in form.fields_mut() {
        ui.label(egui::RichText::new(&field.label).strong());
        ui.text_edit_singleline(&mut field.value);
        ui.add_space(4.0);
    }

    ui.add_space(8.0);
    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Upload").clicked() {
            action = FormAction::ConfirmSubmit;
        }
        if ui
            .add_enabled(previewing, egui::Button::new("Delete Image"))
            .clicked()
        {
            action = FormAction::ConfirmDelete;
        }
    });

    if previewing {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Drag the square to choose the crop region")
                .weak()
                .italics(),
        );
    }

    action
}
