use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use super::details::FieldError;

/// Every validation failure found while cleaning a service's inputs.
///
/// Carries the failures as-is: no merging, deduplication or reordering.
#[derive(Clone, Error, Serialize)]
#[error(
    "invalid inputs: {} field error(s), {} non-field error(s)",
    count_field_errors(.errors),
    .non_field_errors.len()
)]
pub struct InvalidInputsError {
    errors: BTreeMap<String, Vec<FieldError>>,
    non_field_errors: Vec<FieldError>,
}

impl InvalidInputsError {
    pub fn new(
        errors: BTreeMap<String, Vec<FieldError>>,
        non_field_errors: Vec<FieldError>,
    ) -> Self {
        Self {
            errors,
            non_field_errors,
        }
    }

    /// Per-field failures
    pub fn errors(&self) -> &BTreeMap<String, Vec<FieldError>> {
        &self.errors
    }

    /// Failures not attributable to a single field
    pub fn non_field_errors(&self) -> &[FieldError] {
        &self.non_field_errors
    }

    pub fn into_parts(self) -> (BTreeMap<String, Vec<FieldError>>, Vec<FieldError>) {
        (self.errors, self.non_field_errors)
    }
}

fn count_field_errors(errors: &BTreeMap<String, Vec<FieldError>>) -> usize {
    errors.values().map(Vec::len).sum()
}

impl fmt::Debug for InvalidInputsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InvalidInputsError({:?}, {:?})",
            self.errors, self.non_field_errors
        )
    }
}

/// Collects failures during input cleaning and reports them all at once
#[derive(Debug, Clone, Default)]
pub struct InputErrors {
    errors: BTreeMap<String, Vec<FieldError>>,
    non_field_errors: Vec<FieldError>,
}

impl InputErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field_error(&mut self, field: impl Into<String>, error: FieldError) {
        self.errors.entry(field.into()).or_default().push(error);
    }

    pub fn add_non_field_error(&mut self, error: FieldError) {
        self.non_field_errors.push(error);
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.non_field_errors.is_empty()
    }

    /// Total number of recorded failures
    pub fn len(&self) -> usize {
        count_field_errors(&self.errors) + self.non_field_errors.len()
    }

    /// `Err` with everything collected, or `Ok` if nothing was recorded
    pub fn finish(self) -> Result<(), InvalidInputsError> {
        if self.is_empty() {
            return Ok(());
        }
        Err(InvalidInputsError::new(self.errors, self.non_field_errors))
    }
}
