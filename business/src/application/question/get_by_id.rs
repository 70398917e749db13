use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::question::errors::QuestionError;
use crate::domain::question::model::Question;
use crate::domain::question::repository::QuestionRepository;
use crate::domain::question::use_cases::get_by_id::{GetQuestionParams, GetQuestionUseCase};

pub struct GetQuestionUseCaseImpl {
    pub repository: Arc<dyn QuestionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetQuestionUseCase for GetQuestionUseCaseImpl {
    async fn execute(&self, params: GetQuestionParams) -> Result<Question, QuestionError> {
        self.logger
            .debug(&format!("Fetching question by id: {}", params.id));

        self.repository
            .get_by_id(&params.id)
            .await
            .map_err(QuestionError::from_repository)
    }
}
