// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Confirmation modal.
//!
//! Renders the pending confirmation request, if any, and resolves it when
//! the user clicks Confirm or Cancel. The confirmed action is returned to
//! the caller to execute.

use crate::ui::state::{ConfirmAction, UiState};

/// Show the confirmation modal. Returns the action to run if the user
/// confirmed this frame.
pub fn show(ctx: &egui::Context, state: &mut UiState) -> Option<ConfirmAction> {
    let message = state.pending_confirm()?.message.clone();

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(&message);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Confirm").clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        return state.take_confirmed();
    }
    if cancelled {
        state.dismiss_confirm();
    }
    None
}
