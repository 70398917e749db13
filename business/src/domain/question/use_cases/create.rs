use async_trait::async_trait;

use crate::domain::question::errors::QuestionError;
use crate::domain::question::value_objects::QuestionId;

pub struct CreateQuestionParams {
    pub text: String,
}

#[async_trait]
pub trait CreateQuestionUseCase: Send + Sync {
    async fn execute(&self, params: CreateQuestionParams) -> Result<QuestionId, QuestionError>;
}
