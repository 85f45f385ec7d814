use std::collections::HashMap;
use thiserror::Error;

use crate::config::{PageSettings, ServerSettings, Settings};
use crate::domain::{FieldKind, FieldSchema};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Cross-reference error: {0}")]
    CrossReference(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

/// Checks the schema invariants the type system cannot express
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn validate(schema: &FieldSchema) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_names = HashMap::new();

        for (idx, field) in schema.iter().enumerate() {
            if let Some(prev_idx) = seen_names.insert(field.name.as_str(), idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Field name '{}' appears at indices {} and {}",
                    field.name, prev_idx, idx
                )));
            }

            if field.name.is_empty() {
                errors.push(ValidationError::MissingField(format!("fields[{}].name", idx)));
            }

            if field.label.is_empty() {
                errors.push(ValidationError::MissingField(format!("fields[{}].label", idx)));
            }

            match &field.kind {
                FieldKind::Choice { choices, .. } => {
                    if choices.is_empty() {
                        errors.push(ValidationError::InvalidValue {
                            field: format!("fields[{}].choices", idx),
                            reason: "At least one choice is required".to_string(),
                        });
                    }
                    Self::check_unique_values(
                        idx,
                        "choices",
                        choices.iter().map(|c| c.value),
                        &mut errors,
                    );
                }
                FieldKind::Select { options } => {
                    if options.is_empty() {
                        errors.push(ValidationError::InvalidValue {
                            field: format!("fields[{}].options", idx),
                            reason: "At least one option is required".to_string(),
                        });
                    }
                    Self::check_unique_values(
                        idx,
                        "options",
                        options.iter().map(|o| o.value),
                        &mut errors,
                    );
                }
                FieldKind::Text { .. } | FieldKind::TextArea { .. } => {}
            }
        }

        errors.extend(Self::check_control_ids(schema));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_unique_values(
        idx: usize,
        list: &str,
        values: impl Iterator<Item = i64>,
        errors: &mut Vec<ValidationError>,
    ) {
        let mut seen = HashMap::new();
        for (pos, value) in values.enumerate() {
            if let Some(prev) = seen.insert(value, pos) {
                errors.push(ValidationError::Duplicate(format!(
                    "fields[{}].{} value {} appears at positions {} and {}",
                    idx, list, value, prev, pos
                )));
            }
        }
    }

    /// Every id the renderer emits must be unique across the document.
    /// Repeats within one field name are already reported as duplicates.
    fn check_control_ids(schema: &FieldSchema) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut owners: HashMap<String, &str> = HashMap::new();

        for field in schema.iter() {
            for id in field.control_ids() {
                if let Some(owner) = owners.get(id.as_str()) {
                    if *owner != field.name {
                        errors.push(ValidationError::CrossReference(format!(
                            "Control id '{}' is emitted by both field '{}' and field '{}'",
                            id, owner, field.name
                        )));
                    }
                    continue;
                }
                owners.insert(id, field.name.as_str());
            }
        }

        errors
    }
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_page(&settings.page) {
            errors.extend(e);
        }

        if let Err(e) = SchemaValidator::validate(&settings.schema()) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_page(page: &PageSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_ids = HashMap::new();

        for (idx, id) in page.containers.iter().enumerate() {
            if id.is_empty() {
                errors.push(ValidationError::MissingField(format!(
                    "page.containers[{}]",
                    idx
                )));
            }
            if let Some(prev_idx) = seen_ids.insert(id.as_str(), idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Container id '{}' appears at indices {} and {}",
                    id, prev_idx, idx
                )));
            }
        }

        // A mount target outside `containers` is left to the mount policy

        if page.mount_target.is_empty() {
            errors.push(ValidationError::MissingField("page.mount_target".to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
