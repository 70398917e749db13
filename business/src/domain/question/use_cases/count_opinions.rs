use async_trait::async_trait;

use crate::domain::question::errors::QuestionError;
use crate::domain::question::value_objects::QuestionId;

pub struct CountOpinionsParams {
    pub question_id: QuestionId,
}

#[async_trait]
pub trait CountOpinionsUseCase: Send + Sync {
    async fn execute(&self, params: CountOpinionsParams) -> Result<usize, QuestionError>;
}
