// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared UI state: global loader, confirmation modal, and notices.
//!
//! Components receive this service rather than reaching for global
//! widgets, so tests can drive the loader and modal without a UI. One
//! notice channel carries all success and failure messages.

/// What a confirmed modal should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Open a URL in the system browser.
    Navigate(String),
    /// Submit the form with this id.
    SubmitForm(String),
}

/// A pending confirmation: message shown to the user plus the action to
/// run if they confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub message: String,
    pub action: ConfirmAction,
}

/// Severity of a notice banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A dismissible message banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Page-lifetime UI state shared across components.
#[derive(Debug, Default)]
pub struct UiState {
    loader_visible: bool,
    pending_confirm: Option<ConfirmRequest>,
    notice: Option<Notice>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Global loader ---

    pub fn show_loader(&mut self) {
        self.loader_visible = true;
    }

    pub fn hide_loader(&mut self) {
        self.loader_visible = false;
    }

    pub fn loader_visible(&self) -> bool {
        self.loader_visible
    }

    // --- Confirmation modal ---

    /// Ask the user to confirm an action. At most one confirmation is
    /// pending; a new request replaces the previous message and action.
    pub fn request_confirm(&mut self, message: impl Into<String>, action: ConfirmAction) {
        let message = message.into();
        if self.pending_confirm.is_some() {
            log::warn!("Replacing pending confirmation with: {message}");
        }
        self.pending_confirm = Some(ConfirmRequest {
            message,
            action,
        });
    }

    /// Confirm and navigate to a URL.
    pub fn confirm_delete(&mut self, url: impl Into<String>) {
        self.request_confirm(
            "Are you sure you want to delete this item?",
            ConfirmAction::Navigate(url.into()),
        );
    }

    /// Confirm and submit the form with the given id.
    pub fn confirm_save(&mut self, form_id: impl Into<String>) {
        self.request_confirm("Save changes?", ConfirmAction::SubmitForm(form_id.into()));
    }

    pub fn pending_confirm(&self) -> Option<&ConfirmRequest> {
        self.pending_confirm.as_ref()
    }

    /// The user clicked confirm: hide the modal and hand back the action.
    pub fn take_confirmed(&mut self) -> Option<ConfirmAction> {
        self.pending_confirm.take().map(|request| request.action)
    }

    /// The user dismissed the modal without confirming.
    pub fn dismiss_confirm(&mut self) {
        self.pending_confirm = None;
    }

    // --- Notices ---

    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        });
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        });
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_toggles() {
        let mut state = UiState::new();
        assert!(!state.loader_visible());
        state.show_loader();
        assert!(state.loader_visible());
        state.hide_loader();
        assert!(!state.loader_visible());
    }

    #[test]
    fn test_confirm_delete_navigates_on_confirm() {
        let mut state = UiState::new();
        state.confirm_delete("/delete/5");

        let pending = state.pending_confirm().unwrap();
        assert_eq!(pending.message, "Are you sure you want to delete this item?");

        let action = state.take_confirmed().unwrap();
        assert_eq!(action, ConfirmAction::Navigate("/delete/5".to_string()));
        // Modal is hidden once confirmed
        assert!(state.pending_confirm().is_none());
    }

    #[test]
    fn test_confirm_save_submits_form_by_id() {
        let mut state = UiState::new();
        state.confirm_save("myForm");
        assert_eq!(
            state.take_confirmed(),
            Some(ConfirmAction::SubmitForm("myForm".to_string()))
        );
    }

    #[test]
    fn test_new_request_replaces_pending_one() {
        let mut state = UiState::new();
        state.confirm_delete("/delete/1");
        state.confirm_save("myForm");

        // Last request wins: one pending confirmation, the newest
        assert_eq!(state.pending_confirm().unwrap().message, "Save changes?");
        assert_eq!(
            state.take_confirmed(),
            Some(ConfirmAction::SubmitForm("myForm".to_string()))
        );
        assert!(state.take_confirmed().is_none());
    }

    #[test]
    fn test_dismiss_drops_pending_action() {
        let mut state = UiState::new();
        state.confirm_delete("/delete/5");
        state.dismiss_confirm();
        assert!(state.pending_confirm().is_none());
        assert!(state.take_confirmed().is_none());
    }

    #[test]
    fn test_notice_channel() {
        let mut state = UiState::new();
        state.notify_error("Upload failed");
        assert_eq!(state.notice().unwrap().level, NoticeLevel::Error);
        state.notify_info("Image updated!");
        assert_eq!(state.notice().unwrap().level, NoticeLevel::Info);
        state.clear_notice();
        assert!(state.notice().is_none());
    }
}
