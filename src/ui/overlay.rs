// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Global loader overlay and notice banner.
//!
//! The loader dims the whole window and blocks interaction while a
//! submission is in flight. Notices render as a dismissible banner along
//! the bottom, the single channel for success and failure messages.

use crate::ui::state::{NoticeLevel, UiState};

/// Draw the full-window loading overlay when the loader is shown.
pub fn show_loader(ctx: &egui::Context, state: &UiState) {
    if !state.loader_visible() {
        return;
    }

    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("global_loader_dim"),
    ));
    painter.rect_filled(screen, 0.0, egui::Color32::from_black_alpha(140));

    // Swallow clicks while loading
    egui::Area::new(egui::Id::new("global_loader_blocker"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.allocate_rect(screen, egui::Sense::click_and_drag());
        });

    egui::Area::new(egui::Id::new("global_loader"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Uploading...")
                        .size(16.0)
                        .color(egui::Color32::from_gray(220)),
                );
            });
        });

    // Keep the spinner animating
    ctx.request_repaint();
}

/// Draw the notice banner, if any notice is pending.
pub fn show_notice(ctx: &egui::Context, state: &mut UiState) {
    let Some(notice) = state.notice().cloned() else {
        return;
    };

    let mut dismissed = false;
    egui::TopBottomPanel::bottom("notice_banner").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let color = match notice.level {
                NoticeLevel::Info => egui::Color32::from_rgb(110, 200, 110),
                NoticeLevel::Error => egui::Color32::from_rgb(230, 110, 110),
            };
            ui.label(egui::RichText::new(&notice.text).color(color));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Dismiss").clicked() {
                    dismissed = true;
                }
            });
        });
    });

    if dismissed {
        state.clear_notice();
    }
}
