use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("question.question_empty")]
    QuestionEmpty,
    #[error("question.opinion_empty")]
    OpinionEmpty,
    #[error("question.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl QuestionError {
    /// Maps a repository failure, turning a missing record into `NotFound`.
    pub fn from_repository(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => QuestionError::NotFound,
            other => QuestionError::Repository(other),
        }
    }
}
