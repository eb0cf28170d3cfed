// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Upload form state.
//!
//! This module models the multipart form sent to the server: named text
//! fields, an optional file attachment, and the hidden crop-data field
//! filled in from the crop engine just before submission.

use crate::models::crop::CropEngine;
use anyhow::Result;
use std::path::PathBuf;

/// A single editable text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    default: String,
}

/// The file the form will upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    /// Multipart field name the server expects the file under.
    pub field_name: String,
    pub file_name: String,
    pub path: PathBuf,
}

/// Snapshot of a form taken at submission time, ready to be encoded as a
/// multipart body on the network thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pub url: String,
    pub fields: Vec<(String, String)>,
    pub attachment: Option<FileAttachment>,
}

/// An upload form: endpoint, text fields, attachment, and the hidden
/// crop-data field.
#[derive(Debug, Clone)]
pub struct UploadForm {
    /// Identifier used by confirm-then-submit requests.
    pub id: String,
    endpoint: String,
    fields: Vec<FormField>,
    attachment: Option<FileAttachment>,
    crop_field: String,
    crop_data: Option<String>,
}

impl UploadForm {
    pub fn new(id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            fields: Vec::new(),
            attachment: None,
            crop_field: "crop_data".to_string(),
            crop_data: None,
        }
    }

    /// Add a text field with a default value.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        let default = default.into();
        self.fields.push(FormField {
            name: name.into(),
            label: label.into(),
            value: default.clone(),
            default,
        });
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }

    pub fn attachment(&self) -> Option<&FileAttachment> {
        self.attachment.as_ref()
    }

    pub fn crop_data(&self) -> Option<&str> {
        self.crop_data.as_deref()
    }

    /// Adopt a file as the form's attachment, as a manual pick or a drop.
    pub fn attach(&mut self, path: PathBuf) {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        self.attachment = Some(FileAttachment {
            field_name: "image".to_string(),
            file_name,
            path,
        });
    }

    /// Serialize the engine's current region into the hidden crop field.
    ///
    /// With no engine active the field is left untouched, so a submission
    /// without a chosen image carries no crop data at all.
    pub fn apply_crop(&mut self, engine: Option<&dyn CropEngine>) -> Result<()> {
        if let Some(engine) = engine {
            self.crop_data = Some(serde_json::to_string(&engine.region())?);
        }
        Ok(())
    }

    /// Snapshot the form for submission. The crop field is included only
    /// when it has been populated.
    pub fn payload(&self) -> FormPayload {
        let mut fields: Vec<(String, String)> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        if let Some(ref crop) = self.crop_data {
            fields.push((self.crop_field.clone(), crop.clone()));
        }
        FormPayload {
            url: self.endpoint.clone(),
            fields,
            attachment: self.attachment.clone(),
        }
    }

    /// Restore all fields to their defaults and drop attachment and crop
    /// data.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.default.clone();
        }
        self.attachment = None;
        self.crop_data = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::crop::{CropEngine, CropRegion};

    struct FakeEngine(CropRegion);

    impl CropEngine for FakeEngine {
        fn region(&self) -> CropRegion {
            self.0
        }
    }

    fn test_form() -> UploadForm {
        UploadForm::new("profile-image-form", "http://example.com/profile/image")
            .with_field("caption", "Caption", "")
    }

    #[test]
    fn test_apply_crop_without_engine_leaves_field_untouched() {
        let mut form = test_form();
        form.apply_crop(None).unwrap();
        assert_eq!(form.crop_data(), None);

        let payload = form.payload();
        assert!(payload.fields.iter().all(|(name, _)| name != "crop_data"));
    }

    #[test]
    fn test_apply_crop_serializes_engine_region_exactly() {
        let region = CropRegion {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 100.0,
            rotate: 0.0,
        };
        let mut form = test_form();
        form.apply_crop(Some(&FakeEngine(region))).unwrap();

        let expected = serde_json::to_string(&region).unwrap();
        assert_eq!(form.crop_data(), Some(expected.as_str()));

        let payload = form.payload();
        assert!(payload
            .fields
            .iter()
            .any(|(name, value)| name == "crop_data" && *value == expected));
    }

    #[test]
    fn test_attach_adopts_file_name() {
        let mut form = test_form();
        form.attach(PathBuf::from("/tmp/photos/avatar.png"));
        let attachment = form.attachment().unwrap();
        assert_eq!(attachment.file_name, "avatar.png");
        assert_eq!(attachment.field_name, "image");
    }

    #[test]
    fn test_reset_restores_pristine_state() {
        let mut form = test_form();
        form.fields_mut()[0].value = "holiday".to_string();
        form.attach(PathBuf::from("/tmp/a.png"));
        form.apply_crop(Some(&FakeEngine(CropRegion {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            rotate: 0.0,
        })))
        .unwrap();

        form.reset();
        assert_eq!(form.payload().fields, vec![("caption".to_string(), String::new())]);
        assert!(form.attachment().is_none());
        assert_eq!(form.crop_data(), None);
    }
}
