use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::summary::errors::SummaryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SummaryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match self {
            SummaryError::QuestionNotFound => {
                (StatusCode::NOT_FOUND, "Question not found".to_string())
            }
            SummaryError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Missing OPENAI_API_KEY on server".to_string(),
            ),
            SummaryError::GenerationFailed(reason) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Summarization failed: {}", reason),
            ),
            SummaryError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
