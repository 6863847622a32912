use std::collections::HashMap;
use thiserror::Error;

use crate::config::{ServerSettings, Settings};
use crate::domain::SchemaTemplate;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if settings.generator.max_records == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "generator.max_records".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        if settings.templates_path.is_empty() {
            errors.push(ValidationError::MissingField("templates_path".to_string()));
        }

        if let Err(e) = Self::validate_templates(&settings.templates) {
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

    fn validate_templates(templates: &[SchemaTemplate]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_ids = HashMap::new();

        for (idx, template) in templates.iter().enumerate() {
            if let Some(prev_idx) = seen_ids.insert(&template.id, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Template id '{}' appears at indices {} and {}",
                    template.id, prev_idx, idx
                )));
            }

            if template.id.is_empty() {
                errors.push(ValidationError::MissingField(format!(
                    "templates[{idx}].id"
                )));
            }

            if template.name.is_empty() {
                errors.push(ValidationError::MissingField(format!(
                    "templates[{idx}].name"
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
