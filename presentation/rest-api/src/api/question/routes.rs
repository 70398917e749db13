use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::question::use_cases::count_opinions::{
    CountOpinionsParams, CountOpinionsUseCase,
};
use business::domain::question::use_cases::create::{CreateQuestionParams, CreateQuestionUseCase};
use business::domain::question::use_cases::get_by_id::{GetQuestionParams, GetQuestionUseCase};
use business::domain::question::use_cases::submit_opinion::{
    SubmitOpinionParams, SubmitOpinionUseCase,
};
use business::domain::question::value_objects::QuestionId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::question::dto::{
    CreateQuestionRequest, OpinionCountResponse, OpinionSubmittedResponse, QuestionLinkResponse,
    QuestionTextResponse, SubmitOpinionRequest,
};
use crate::api::tags::ApiTags;

pub struct QuestionApi {
    create_use_case: Arc<dyn CreateQuestionUseCase>,
    get_use_case: Arc<dyn GetQuestionUseCase>,
    submit_opinion_use_case: Arc<dyn SubmitOpinionUseCase>,
    count_opinions_use_case: Arc<dyn CountOpinionsUseCase>,
}

impl QuestionApi {
    pub fn new(
        create_use_case: Arc<dyn CreateQuestionUseCase>,
        get_use_case: Arc<dyn GetQuestionUseCase>,
        submit_opinion_use_case: Arc<dyn SubmitOpinionUseCase>,
        count_opinions_use_case: Arc<dyn CountOpinionsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_use_case,
            submit_opinion_use_case,
            count_opinions_use_case,
        }
    }
}

/// Question and opinion API
///
/// Endpoints for creating questions and collecting anonymous opinions.
#[OpenApi]
impl QuestionApi {
    /// Create a question
    ///
    /// Stores a new question and returns the link to share with respondents.
    #[oai(
        path = "/api/create-question",
        method = "post",
        tag = "ApiTags::Questions"
    )]
    async fn create(&self, body: Json<CreateQuestionRequest>) -> CreateQuestionResponse {
        let params = CreateQuestionParams {
            text: body.0.question.unwrap_or_default(),
        };

        match self.create_use_case.execute(params).await {
            Ok(id) => CreateQuestionResponse::Ok(Json(id.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateQuestionResponse::BadRequest(json),
                    _ => CreateQuestionResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a question
    ///
    /// Returns the question text.
    #[oai(path = "/api/question/:id", method = "get", tag = "ApiTags::Questions")]
    async fn get(&self, id: Path<String>) -> GetQuestionResponse {
        let params = GetQuestionParams {
            id: QuestionId::new(id.0),
        };

        match self.get_use_case.execute(params).await {
            Ok(question) => GetQuestionResponse::Ok(Json(question.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetQuestionResponse::NotFound(json),
                    _ => GetQuestionResponse::InternalError(json),
                }
            }
        }
    }

    /// Submit an opinion
    ///
    /// Appends an anonymous opinion to the question. Text longer than the cap
    /// is stored truncated.
    #[oai(
        path = "/api/submit-opinion/:id",
        method = "post",
        tag = "ApiTags::Opinions"
    )]
    async fn submit_opinion(
        &self,
        id: Path<String>,
        body: Json<SubmitOpinionRequest>,
    ) -> SubmitOpinionResponse {
        let params = SubmitOpinionParams {
            question_id: QuestionId::new(id.0),
            text: body.0.opinion.unwrap_or_default(),
        };

        match self.submit_opinion_use_case.execute(params).await {
            Ok(()) => SubmitOpinionResponse::Ok(Json(OpinionSubmittedResponse { success: true })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitOpinionResponse::BadRequest(json),
                    404 => SubmitOpinionResponse::NotFound(json),
                    _ => SubmitOpinionResponse::InternalError(json),
                }
            }
        }
    }

    /// Count opinions
    ///
    /// Returns how many opinions the question has received.
    #[oai(
        path = "/api/opinion-count/:id",
        method = "get",
        tag = "ApiTags::Opinions"
    )]
    async fn opinion_count(&self, id: Path<String>) -> GetOpinionCountResponse {
        let params = CountOpinionsParams {
            question_id: QuestionId::new(id.0),
        };

        match self.count_opinions_use_case.execute(params).await {
            Ok(count) => GetOpinionCountResponse::Ok(Json(OpinionCountResponse {
                count: count as u64,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOpinionCountResponse::NotFound(json),
                    _ => GetOpinionCountResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateQuestionResponse {
    #[oai(status = 200)]
    Ok(Json<QuestionLinkResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetQuestionResponse {
    #[oai(status = 200)]
    Ok(Json<QuestionTextResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitOpinionResponse {
    #[oai(status = 200)]
    Ok(Json<OpinionSubmittedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOpinionCountResponse {
    #[oai(status = 200)]
    Ok(Json<OpinionCountResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
