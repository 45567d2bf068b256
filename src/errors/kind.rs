use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Error categories, each with a fixed default status/message/translation key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Unclassified failure, the generic fallback
    Internal,

    /// Caller lacks valid credentials
    Unauthorized,

    /// Requested resource does not exist
    NotFound,

    /// Caller-supplied data is invalid
    Validation,

    /// Caller is authenticated but not permitted
    Forbidden,

    /// Generic 400-class error, distinct from validation by translation key
    System,

    /// Validation failure raised from inside service-object logic
    ServiceObjectLogic,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 7] = [
        Self::Internal,
        Self::Unauthorized,
        Self::NotFound,
        Self::Validation,
        Self::Forbidden,
        Self::System,
        Self::ServiceObjectLogic,
    ];

    /// Default HTTP status for this category
    pub fn default_status(&self) -> u16 {
        match self {
            Self::Internal => 500,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Forbidden => 403,
            Self::System => 400,
            Self::Validation | Self::ServiceObjectLogic => 400,
        }
    }

    /// Default user-facing message for this category
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Internal => "We are sorry but something went wrong",
            Self::Unauthorized => "Authorization is required",
            Self::NotFound => "Resource not found",
            Self::Forbidden => "Access denied",
            Self::System => "Invalid requ",
            Self::Validation | Self::ServiceObjectLogic => "Invalid request data",
        }
    }

    /// Default translation key for this category
    pub fn default_translation_key(&self) -> &'static str {
        match self {
            Self::Internal => "internal_server_error",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not_found",
            Self::Forbidden => "forbidden",
            Self::System => "system_error",
            Self::Validation | Self::ServiceObjectLogic => "invalid_request_data",
        }
    }

    /// Whether this kind is a validation error or a specialization of one
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation | Self::ServiceObjectLogic)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => write!(f, "internal"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::NotFound => write!(f, "not_found"),
            Self::Validation => write!(f, "validation"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::System => write!(f, "system"),
            Self::ServiceObjectLogic => write!(f, "service_object_logic"),
        }
    }
}
