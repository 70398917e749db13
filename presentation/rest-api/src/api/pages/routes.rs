use std::sync::Arc;

use poem_openapi::payload::{Html, PlainText};
use poem_openapi::{ApiResponse, OpenApi, param::Path};

use business::domain::question::errors::QuestionError;
use business::domain::question::use_cases::get_by_id::{GetQuestionParams, GetQuestionUseCase};
use business::domain::question::value_objects::QuestionId;

use super::assets::{INDEX_HTML, OPINION_HTML, SUMMARY_HTML};

/// Browser pages. Hidden from the OpenAPI document.
pub struct PageApi {
    get_question_use_case: Arc<dyn GetQuestionUseCase>,
}

impl PageApi {
    pub fn new(get_question_use_case: Arc<dyn GetQuestionUseCase>) -> Self {
        Self {
            get_question_use_case,
        }
    }

    async fn render_for_question(&self, id: String, page: &'static str) -> PageResponse {
        let params = GetQuestionParams {
            id: QuestionId::new(id),
        };

        match self.get_question_use_case.execute(params).await {
            Ok(_) => PageResponse::Ok(Html(page.to_string())),
            Err(QuestionError::NotFound) => {
                PageResponse::NotFound(PlainText("Question not found.".to_string()))
            }
            Err(_) => PageResponse::InternalError(PlainText("Internal server error".to_string())),
        }
    }
}

#[OpenApi]
impl PageApi {
    /// Landing page for creating a question.
    #[oai(path = "/", method = "get", hidden)]
    async fn index(&self) -> PageResponse {
        PageResponse::Ok(Html(INDEX_HTML.to_string()))
    }

    /// Page where respondents submit their opinion.
    #[oai(path = "/question/:id", method = "get", hidden)]
    async fn opinion_page(&self, id: Path<String>) -> PageResponse {
        self.render_for_question(id.0, OPINION_HTML).await
    }

    /// Page where the summary is requested.
    #[oai(path = "/summary/:id", method = "get", hidden)]
    async fn summary_page(&self, id: Path<String>) -> PageResponse {
        self.render_for_question(id.0, SUMMARY_HTML).await
    }
}

#[derive(ApiResponse)]
pub enum PageResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 404)]
    NotFound(PlainText<String>),
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}
