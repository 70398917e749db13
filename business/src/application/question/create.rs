use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::question::errors::QuestionError;
use crate::domain::question::repository::QuestionRepository;
use crate::domain::question::use_cases::create::{CreateQuestionParams, CreateQuestionUseCase};
use crate::domain::question::value_objects::{QuestionId, QuestionText};

pub struct CreateQuestionUseCaseImpl {
    pub repository: Arc<dyn QuestionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateQuestionUseCase for CreateQuestionUseCaseImpl {
    async fn execute(&self, params: CreateQuestionParams) -> Result<QuestionId, QuestionError> {
        // Rejected input must not consume an id
        let text = QuestionText::parse(&params.text)?;

        let id = self.repository.create(&text).await?;

        self.logger.info(&format!("Question created: {}", id));
        Ok(id)
    }
}
