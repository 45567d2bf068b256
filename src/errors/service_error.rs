use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, info, warn};

use super::body::ErrorBody;
use super::details::ErrorDetails;
use super::kind::ErrorKind;
use crate::config::ErrorConfig;

/// Structured application error handed up to the response layer.
///
/// `translation_key`, `message` and `response_status` always hold a value:
/// whatever the caller supplied, or the defaults of [`ErrorKind`]. Empty
/// strings and a zero status count as not supplied. The remaining fields are
/// never defaulted.
///
/// Fields are read-only once built; the `with_*` methods consume the value
/// and are meant to be chained at the construction site.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
pub struct ServiceError {
    #[serde(skip)]
    kind: ErrorKind,
    translation_key: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<ErrorDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_info: Option<Value>,
    response_status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors_dict: Option<Map<String, Value>>,
}

/// All-optional constructor arguments for [`ServiceError::from_params`]
#[derive(Debug, Clone, Default)]
pub struct ErrorParams {
    pub translation_key: Option<String>,
    pub message: Option<String>,
    pub debug_message: Option<String>,
    pub details: Option<ErrorDetails>,
    pub additional_info: Option<Value>,
    pub response_status: Option<u16>,
    pub errors_dict: Option<Map<String, Value>>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ServiceError {
    /// Create an error carrying only the defaults of `kind`
    pub fn new(kind: ErrorKind) -> Self {
        Self::from_params(kind, ErrorParams::default())
    }

    /// Create an error from explicit arguments, defaulting the missing ones
    pub fn from_params(kind: ErrorKind, params: ErrorParams) -> Self {
        Self {
            kind,
            translation_key: non_empty(params.translation_key)
                .unwrap_or_else(|| kind.default_translation_key().to_string()),
            message: non_empty(params.message)
                .unwrap_or_else(|| kind.default_message().to_string()),
            debug_message: params.debug_message,
            details: params.details,
            additional_info: params.additional_info,
            response_status: params
                .response_status
                .filter(|status| *status != 0)
                .unwrap_or_else(|| kind.default_status()),
            errors_dict: params.errors_dict,
        }
    }

    pub fn with_translation_key(mut self, translation_key: impl Into<String>) -> Self {
        if let Some(key) = non_empty(Some(translation_key.into())) {
            self.translation_key = key;
        }
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Some(message) = non_empty(Some(message.into())) {
            self.message = message;
        }
        self
    }

    pub fn with_debug_message(mut self, debug_message: impl Into<String>) -> Self {
        self.debug_message = Some(debug_message.into());
        self
    }

    pub fn with_details(mut self, details: ErrorDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_additional_info(mut self, additional_info: Value) -> Self {
        self.additional_info = Some(additional_info);
        self
    }

    pub fn with_response_status(mut self, response_status: u16) -> Self {
        if response_status != 0 {
            self.response_status = response_status;
        }
        self
    }

    pub fn with_errors_dict(mut self, errors_dict: Map<String, Value>) -> Self {
        self.errors_dict = Some(errors_dict);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn translation_key(&self) -> &str {
        &self.translation_key
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn debug_message(&self) -> Option<&str> {
        self.debug_message.as_deref()
    }

    pub fn details(&self) -> Option<&ErrorDetails> {
        self.details.as_ref()
    }

    pub fn additional_info(&self) -> Option<&Value> {
        self.additional_info.as_ref()
    }

    pub fn response_status(&self) -> u16 {
        self.response_status
    }

    pub fn errors_dict(&self) -> Option<&Map<String, Value>> {
        self.errors_dict.as_ref()
    }

    /// Legacy code exposed by not-found errors only
    pub fn code(&self) -> Option<&'static str> {
        (self.kind == ErrorKind::NotFound).then_some("not_found")
    }

    /// Build the public error body, hiding debug-only fields unless configured
    pub fn to_body(&self, config: &ErrorConfig) -> ErrorBody {
        ErrorBody::from_error(self, config)
    }

    /// Emit a structured log event for this error, including debug-only fields
    pub fn log(&self) {
        if self.response_status >= 500 {
            error!(
                kind = %self.kind,
                status = self.response_status,
                translation_key = %self.translation_key,
                debug_message = ?self.debug_message,
                additional_info = ?self.additional_info,
                "{}",
                self.message
            );
        } else if self.response_status >= 400 {
            warn!(
                kind = %self.kind,
                status = self.response_status,
                translation_key = %self.translation_key,
                debug_message = ?self.debug_message,
                additional_info = ?self.additional_info,
                "{}",
                self.message
            );
        } else {
            info!(
                kind = %self.kind,
                status = self.response_status,
                translation_key = %self.translation_key,
                debug_message = ?self.debug_message,
                additional_info = ?self.additional_info,
                "{}",
                self.message
            );
        }
    }
}

/// Shorthand constructors, one per category
impl ServiceError {
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized)
    }

    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    pub fn validation() -> Self {
        Self::new(ErrorKind::Validation)
    }

    pub fn forbidden() -> Self {
        Self::new(ErrorKind::Forbidden)
    }

    pub fn system() -> Self {
        Self::new(ErrorKind::System)
    }

    pub fn service_object_logic() -> Self {
        Self::new(ErrorKind::ServiceObjectLogic)
    }
}

impl From<ErrorKind> for ServiceError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
