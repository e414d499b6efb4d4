//! Declarative field schemas for request bodies.

use super::error::ApiError;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Bound applied to short optional selectors such as tone or language.
pub const OPTION_MAX_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Default(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub requirement: Requirement,
    /// Maximum length in characters, measured after trimming.
    pub max_len: usize,
    /// Error returned when a required field is missing or blank.
    pub missing_message: &'static str,
}

impl FieldSpec {
    pub const fn required(
        name: &'static str,
        max_len: usize,
        missing_message: &'static str,
    ) -> Self {
        Self {
            name,
            requirement: Requirement::Required,
            max_len,
            missing_message,
        }
    }

    pub const fn optional(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Default(default),
            max_len: OPTION_MAX_LEN,
            missing_message: "",
        }
    }
}

/// Validated, trimmed field values keyed by field name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fields(HashMap<&'static str, String>);

impl Fields {
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// Checks `body` against `specs`. Specs are checked in order, so the first
/// failing field determines the error.
pub fn extract_fields(body: &Map<String, Value>, specs: &[FieldSpec]) -> Result<Fields, ApiError> {
    let mut fields = HashMap::with_capacity(specs.len());

    for spec in specs {
        let supplied = match body.get(spec.name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.trim()).filter(|s| !s.is_empty()),
            Some(_) => {
                return Err(ApiError::BadRequest(format!("{} must be a string", spec.name)));
            }
        };

        let value = match (supplied, spec.requirement) {
            (Some(value), _) => value,
            (None, Requirement::Default(default)) => default,
            (None, Requirement::Required) => {
                return Err(ApiError::BadRequest(spec.missing_message.to_string()));
            }
        };

        if value.chars().count() > spec.max_len {
            return Err(ApiError::BadRequest(format!("{} too long", spec.name)));
        }

        fields.insert(spec.name, value.to_string());
    }

    Ok(Fields(fields))
}
