use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::question::errors::QuestionError;
use crate::domain::question::repository::QuestionRepository;
use crate::domain::question::use_cases::submit_opinion::{
    SubmitOpinionParams, SubmitOpinionUseCase,
};
use crate::domain::question::value_objects::Opinion;

pub struct SubmitOpinionUseCaseImpl {
    pub repository: Arc<dyn QuestionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitOpinionUseCase for SubmitOpinionUseCaseImpl {
    async fn execute(&self, params: SubmitOpinionParams) -> Result<(), QuestionError> {
        // Unknown question takes precedence over an empty body
        if !self.repository.exists(&params.question_id).await? {
            return Err(QuestionError::NotFound);
        }

        let opinion = Opinion::parse(&params.text)?;

        self.repository
            .append_opinion(&params.question_id, &opinion)
            .await
            .map_err(QuestionError::from_repository)?;

        self.logger.info(&format!(
            "Opinion submitted for question: {}",
            params.question_id
        ));
        Ok(())
    }
}
