use poem::http::StatusCode;
use poem_openapi::error::{ContentTypeError, ParseRequestPayloadError};
use poem_openapi::{Object, payload::Json};

/// Every API failure is reported as `{"error": "..."}`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Malformed JSON bodies are reported in the same shape as domain errors.
pub async fn handle_payload_error(
    err: ParseRequestPayloadError,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(format!(
            "Invalid request body: {}",
            err.reason
        ))),
    )
}

pub async fn handle_content_type_error(
    err: ContentTypeError,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(format!("Invalid request body: {}", err))),
    )
}
