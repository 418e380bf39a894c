//! Form view-model: draft fields and schema validation.
//!
//! One draft type serves both the creation form and the detail dialog, so
//! the two paths share a single validated payload shape. Validation always
//! runs before any network call; on failure the caller gets one message per
//! offending field and issues no request.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use validator::{Validate, ValidationErrors};

use crate::net::types::{EquipmentKind, EquipmentPayload, EquipmentRecord, EquipmentStatus};

/// Raw field values as bound to the dialog inputs.
///
/// `kind` and `status` hold the select-option strings; they only become
/// typed enum values once [`EquipmentDraft::validate`] succeeds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct EquipmentDraft {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub kind: String,
    #[validate(length(min = 1, message = "This field is required."))]
    pub status: String,
    #[validate(length(min = 1, message = "This field is required."), url(message = "Enter a valid image URL."))]
    pub image_url: String,
}

/// One message per invalid field, `None` when the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub image_url: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.status.is_none()
            && self.image_url.is_none()
    }
}

impl EquipmentDraft {
    /// Pre-populate a draft from an existing record for the edit path.
    pub fn from_record(record: &EquipmentRecord) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind.as_str().to_owned(),
            status: record.status.as_str().to_owned(),
            image_url: record.image_url.clone(),
        }
    }

    /// Check the draft against the schema and produce a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] carrying a message for every missing or
    /// invalid field. Required-field and format violations get distinct
    /// messages, as do out-of-enumeration type/status values.
    pub fn validate(&self) -> Result<EquipmentPayload, FieldErrors> {
        let trimmed = self.trimmed();
        let mut errors = FieldErrors::default();

        if let Err(report) = Validate::validate(&trimmed) {
            errors.name = message_for(&report, "name");
            errors.kind = message_for(&report, "kind");
            errors.status = message_for(&report, "status");
            errors.image_url = message_for(&report, "image_url");
        }

        let kind = match trimmed.kind.parse::<EquipmentKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                if errors.kind.is_none() {
                    errors.kind = Some("Select a valid equipment type.".to_owned());
                }
                None
            }
        };
        let status = match trimmed.status.parse::<EquipmentStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                if errors.status.is_none() {
                    errors.status = Some("Select a valid status.".to_owned());
                }
                None
            }
        };

        match (kind, status) {
            (Some(kind), Some(status)) if errors.is_empty() => Ok(EquipmentPayload {
                name: trimmed.name,
                kind,
                status,
                image_url: trimmed.image_url,
            }),
            _ => Err(errors),
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            kind: self.kind.trim().to_owned(),
            status: self.status.trim().to_owned(),
            image_url: self.image_url.trim().to_owned(),
        }
    }
}

/// First message reported for a field, preferring the required-field check
/// over format checks so an empty value reads as missing, not malformed.
fn message_for(report: &ValidationErrors, field: &str) -> Option<String> {
    let field_errors = report.field_errors();
    let list: &[validator::ValidationError] = field_errors.get(field)?;
    let error = list
        .iter()
        .find(|e| e.code == "length")
        .or_else(|| list.first())?;
    error.message.as_ref().map(ToString::to_string)
}
