//! Error taxonomy for service and API layers

pub mod body;
pub mod details;
pub mod invalid_inputs;
pub mod kind;
pub mod service_error;

pub use body::{ErrorBody, ErrorDetail};
pub use details::{ErrorDetails, FieldError};
pub use invalid_inputs::{InputErrors, InvalidInputsError};
pub use kind::ErrorKind;
pub use service_error::{ErrorParams, ServiceError};
