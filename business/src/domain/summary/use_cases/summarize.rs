use async_trait::async_trait;

use crate::domain::question::value_objects::QuestionId;
use crate::domain::summary::errors::SummaryError;
use crate::domain::summary::model::Summary;

pub struct SummarizeOpinionsParams {
    pub question_id: QuestionId,
}

#[async_trait]
pub trait SummarizeOpinionsUseCase: Send + Sync {
    async fn execute(&self, params: SummarizeOpinionsParams) -> Result<Summary, SummaryError>;
}
