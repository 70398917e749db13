use poem_openapi::Object;

use business::domain::question::model::Question;
use business::domain::question::value_objects::QuestionId;

#[derive(Debug, Clone, Object)]
pub struct CreateQuestionRequest {
    /// Question text (cannot be blank)
    pub question: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct QuestionLinkResponse {
    /// Relative link to share with people giving opinions
    pub link: String,
}

impl From<QuestionId> for QuestionLinkResponse {
    fn from(id: QuestionId) -> Self {
        Self {
            link: Question::share_link(&id),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct QuestionTextResponse {
    /// Question text
    pub question: String,
}

impl From<Question> for QuestionTextResponse {
    fn from(question: Question) -> Self {
        Self {
            question: question.text.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SubmitOpinionRequest {
    /// Opinion text (cannot be blank, capped at 4000 characters)
    pub opinion: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct OpinionSubmittedResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Object)]
pub struct OpinionCountResponse {
    /// Number of opinions received so far
    pub count: u64,
}
