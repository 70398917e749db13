use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::question::errors::QuestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for QuestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            QuestionError::QuestionEmpty => (StatusCode::BAD_REQUEST, "Question is required"),
            QuestionError::OpinionEmpty => (StatusCode::BAD_REQUEST, "Opinion is required"),
            QuestionError::NotFound => (StatusCode::NOT_FOUND, "Question not found"),
            QuestionError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
