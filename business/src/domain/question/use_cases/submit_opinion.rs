use async_trait::async_trait;

use crate::domain::question::errors::QuestionError;
use crate::domain::question::value_objects::QuestionId;

pub struct SubmitOpinionParams {
    pub question_id: QuestionId,
    pub text: String,
}

#[async_trait]
pub trait SubmitOpinionUseCase: Send + Sync {
    async fn execute(&self, params: SubmitOpinionParams) -> Result<(), QuestionError>;
}
