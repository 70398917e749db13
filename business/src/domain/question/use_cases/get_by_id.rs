use async_trait::async_trait;

use crate::domain::question::errors::QuestionError;
use crate::domain::question::model::Question;
use crate::domain::question::value_objects::QuestionId;

pub struct GetQuestionParams {
    pub id: QuestionId,
}

#[async_trait]
pub trait GetQuestionUseCase: Send + Sync {
    async fn execute(&self, params: GetQuestionParams) -> Result<Question, QuestionError>;
}
