use utoipa::OpenApi;

use crate::errors::{ErrorBody, ErrorDetail, ErrorKind, FieldError};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Service Errors",
        version = "0.1.0",
        description = "Error body schemas with translation keys and per-field details."
    ),
    components(
        schemas(
            ErrorBody,
            ErrorDetail,
            ErrorKind,
            FieldError,
        )
    )
)]
pub struct ErrorsDoc;
