use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::question::repository::QuestionRepository;
use crate::domain::summary::errors::SummaryError;
use crate::domain::summary::model::{MIN_OPINIONS_FOR_SUMMARY, Summary};
use crate::domain::summary::prompt::SummaryPrompt;
use crate::domain::summary::services::SummarizerService;
use crate::domain::summary::use_cases::summarize::{
    SummarizeOpinionsParams, SummarizeOpinionsUseCase,
};

pub struct SummarizeOpinionsUseCaseImpl {
    pub repository: Arc<dyn QuestionRepository>,
    pub summarizer: Arc<dyn SummarizerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SummarizeOpinionsUseCase for SummarizeOpinionsUseCaseImpl {
    async fn execute(&self, params: SummarizeOpinionsParams) -> Result<Summary, SummaryError> {
        let question = self
            .repository
            .get_by_id(&params.question_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SummaryError::QuestionNotFound,
                other => SummaryError::Repository(other),
            })?;

        if !self.summarizer.is_configured() {
            self.logger
                .error("Summarizer is not configured: missing API key");
            return Err(SummaryError::MissingApiKey);
        }

        if question.opinion_count() < MIN_OPINIONS_FOR_SUMMARY {
            self.logger.info(&format!(
                "Question {} has {} opinions, skipping summary",
                question.id,
                question.opinion_count()
            ));
            return Ok(Summary::placeholder());
        }

        self.logger.info(&format!(
            "Summarizing {} opinions for question: {}",
            question.opinion_count(),
            question.id
        ));

        let prompt = SummaryPrompt::build(&question);
        let text = self.summarizer.summarize(&prompt).await.inspect_err(|e| {
            self.logger
                .error(&format!("Summarization failed for {}: {}", question.id, e));
        })?;

        Ok(Summary::generated(text))
    }
}
