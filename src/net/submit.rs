// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Multipart form submission.
//!
//! Posts a form snapshot to the server as multipart data, marked with the
//! `X-Requested-With: XMLHttpRequest` header the endpoint keys on, and
//! interprets the JSON reply. The request runs on a background thread and
//! reports back over a channel; network and parse failures are folded
//! into an explicit outcome instead of being dropped.

use crate::models::form::FormPayload;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::sync::mpsc::{channel, Receiver};

/// Reply shape the upload endpoint produces.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    pub message: Option<String>,
}

/// What a submission attempt came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the upload (`status == "success"`).
    Accepted(Option<String>),
    /// Server answered, but with a non-success status.
    Rejected(String),
    /// The request never produced a usable reply (network or parse error).
    Failed(String),
}

/// Classify a server reply.
pub fn outcome_of(response: SubmitResponse) -> SubmitOutcome {
    if response.status == "success" {
        SubmitOutcome::Accepted(response.message)
    } else {
        SubmitOutcome::Rejected(
            response
                .message
                .unwrap_or_else(|| format!("Upload rejected ({})", response.status)),
        )
    }
}

/// Parse a response body into the expected reply shape.
pub fn parse_body(body: &str) -> Result<SubmitResponse> {
    serde_json::from_str(body).context("Server returned an unexpected response")
}

/// Perform one multipart POST. Exactly one request per call; no retry.
fn post_form(payload: FormPayload) -> Result<SubmitOutcome> {
    let mut form = reqwest::blocking::multipart::Form::new();
    for (name, value) in payload.fields {
        form = form.text(name, value);
    }
    if let Some(attachment) = payload.attachment {
        let bytes = std::fs::read(&attachment.path)
            .with_context(|| format!("Failed to read {}", attachment.path.display()))?;
        form = form.part(
            attachment.field_name,
            reqwest::blocking::multipart::Part::bytes(bytes).file_name(attachment.file_name),
        );
    }

    let response = reqwest::blocking::Client::new()
        .post(&payload.url)
        .header("X-Requested-With", "XMLHttpRequest")
        .multipart(form)
        .send()
        .context("Upload request failed")?;

    let body = response.text().context("Failed to read server response")?;
    Ok(outcome_of(parse_body(&body)?))
}

/// Submit a form snapshot on a background thread.
///
/// The returned receiver yields exactly one outcome; errors arrive as
/// `SubmitOutcome::Failed` rather than as a dropped channel.
pub fn submit_in_background(payload: FormPayload) -> Receiver<SubmitOutcome> {
    let (sender, receiver) = channel();
    std::thread::spawn(move || {
        log::info!("Submitting form to {}", payload.url);
        let outcome = match post_form(payload) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Submission failed: {e:#}");
                SubmitOutcome::Failed(e.to_string())
            }
        };
        let _ = sender.send(outcome);
    });
    receiver
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status_is_accepted() {
        let response = parse_body(r#"{"status": "success"}"#).unwrap();
        assert_eq!(outcome_of(response), SubmitOutcome::Accepted(None));

        let response = parse_body(r#"{"status": "success", "message": "Image updated!"}"#).unwrap();
        assert_eq!(
            outcome_of(response),
            SubmitOutcome::Accepted(Some("Image updated!".to_string()))
        );
    }

    #[test]
    fn test_other_status_is_rejected_with_server_message() {
        let response =
            parse_body(r#"{"status": "error", "message": "Image too large"}"#).unwrap();
        assert_eq!(
            outcome_of(response),
            SubmitOutcome::Rejected("Image too large".to_string())
        );
    }

    #[test]
    fn test_rejection_without_message_gets_a_fallback() {
        let response = parse_body(r#"{"status": "denied"}"#).unwrap();
        match outcome_of(response) {
            SubmitOutcome::Rejected(message) => assert!(message.contains("denied")),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_is_a_parse_error() {
        assert!(parse_body("<html>502 Bad Gateway</html>").is_err());
        assert!(parse_body("").is_err());
    }

    #[test]
    fn test_missing_attachment_file_reports_failure() {
        let payload = FormPayload {
            url: "http://localhost:1/upload".to_string(),
            fields: vec![],
            attachment: Some(crate::models::form::FileAttachment {
                field_name: "image".to_string(),
                file_name: "gone.png".to_string(),
                path: std::path::PathBuf::from("/definitely/not/here.png"),
            }),
        };
        let receiver = submit_in_background(payload);
        match receiver.recv().unwrap() {
            SubmitOutcome::Failed(_) => {}
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
