pub mod config;
pub mod errors;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod test_support;

pub use config::ErrorConfig;
pub use errors::{
    ErrorBody, ErrorDetail, ErrorDetails, ErrorKind, ErrorParams, FieldError, InputErrors,
    InvalidInputsError, ServiceError,
};
pub use service::{ExecuteError, Service};
