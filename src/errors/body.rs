use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::details::FieldError;
use super::service_error::ServiceError;
use crate::config::ErrorConfig;

/// Structured error body handed to the response layer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always false for errors
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

/// Error details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Key for localized message lookup
    pub translation_key: String,
    /// Human-readable fallback message
    pub message: String,
    /// HTTP status the response should carry
    pub response_status: u16,
    /// Per-field validation failures (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Vec<FieldError>>>,
    /// Service-object errors (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub errors_dict: Option<Map<String, Value>>,
    /// Internal diagnostics, only present when debug output is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_message: Option<String>,
    /// Extra diagnostics, only present when debug output is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub additional_info: Option<Value>,
}

impl ErrorBody {
    pub fn from_error(err: &ServiceError, config: &ErrorConfig) -> Self {
        let (debug_message, additional_info) = if config.expose_debug {
            (
                err.debug_message().map(str::to_string),
                err.additional_info().cloned(),
            )
        } else {
            (None, None)
        };

        Self {
            success: false,
            error: ErrorDetail {
                translation_key: err.translation_key().to_string(),
                message: err.message().to_string(),
                response_status: err.response_status(),
                details: err.details().cloned(),
                errors_dict: err.errors_dict().cloned(),
                debug_message,
                additional_info,
            },
        }
    }
}

impl From<&ServiceError> for ErrorBody {
    fn from(err: &ServiceError) -> Self {
        Self::from_error(err, &ErrorConfig::default())
    }
}
