use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("summary.question_not_found")]
    QuestionNotFound,
    #[error("summary.missing_api_key")]
    MissingApiKey,
    #[error("summary.generation_failed: {0}")]
    GenerationFailed(String),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
