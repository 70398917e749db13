use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Question;
use super::value_objects::{Opinion, QuestionId, QuestionText};

/// Store of questions and their opinions.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Allocates a fresh identifier and stores the question with no opinions.
    async fn create(&self, text: &QuestionText) -> Result<QuestionId, RepositoryError>;
    async fn get_by_id(&self, id: &QuestionId) -> Result<Question, RepositoryError>;
    async fn exists(&self, id: &QuestionId) -> Result<bool, RepositoryError>;
    async fn append_opinion(
        &self,
        id: &QuestionId,
        opinion: &Opinion,
    ) -> Result<(), RepositoryError>;
    async fn count_opinions(&self, id: &QuestionId) -> Result<usize, RepositoryError>;
}
