use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A single validation failure, keyed for localization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Key used to look up a localized message
    pub translation_key: String,
    /// Fallback message when no translation exists
    pub message: String,
}

impl FieldError {
    pub fn new(translation_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            translation_key: translation_key.into(),
            message: message.into(),
        }
    }
}

/// Field-or-key name to the failures recorded for it, in insertion order per key
pub type ErrorDetails = BTreeMap<String, Vec<FieldError>>;
