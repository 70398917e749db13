use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::question::value_objects::QuestionId;
use business::domain::summary::use_cases::summarize::{
    SummarizeOpinionsParams, SummarizeOpinionsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::summary::dto::SummaryResponse;
use crate::api::tags::ApiTags;

pub struct SummaryApi {
    summarize_use_case: Arc<dyn SummarizeOpinionsUseCase>,
}

impl SummaryApi {
    pub fn new(summarize_use_case: Arc<dyn SummarizeOpinionsUseCase>) -> Self {
        Self { summarize_use_case }
    }
}

/// Summary API
///
/// Endpoint for the AI-generated sentiment summary of a question's opinions.
#[OpenApi]
impl SummaryApi {
    /// Summarize opinions
    ///
    /// Sends every opinion to the completion model and returns its answer.
    /// Nothing is cached: each call asks the model again. With fewer than two
    /// opinions a fixed notice is returned and the model is not called.
    #[oai(path = "/api/summarize/:id", method = "get", tag = "ApiTags::Summaries")]
    async fn summarize(&self, id: Path<String>) -> GetSummaryResponse {
        let params = SummarizeOpinionsParams {
            question_id: QuestionId::new(id.0),
        };

        match self.summarize_use_case.execute(params).await {
            Ok(summary) => GetSummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetSummaryResponse::NotFound(json),
                    _ => GetSummaryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSummaryResponse {
    #[oai(status = 200)]
    Ok(Json<SummaryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
