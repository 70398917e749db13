use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::question::model::Question;
use business::domain::question::repository::QuestionRepository;
use business::domain::question::value_objects::{Opinion, QuestionId, QuestionText};

use super::entity::QuestionEntity;

/// Process-lifetime question store. Everything is lost on restart.
pub struct QuestionRepositoryInMemory {
    counter: AtomicU64,
    questions: RwLock<HashMap<String, QuestionEntity>>,
}

impl QuestionRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
            questions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for QuestionRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for QuestionRepositoryInMemory {
    async fn create(&self, text: &QuestionText) -> Result<QuestionId, RepositoryError> {
        let sequence = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let id = QuestionId::from_sequence(sequence);

        self.questions.write().await.insert(
            id.as_str().to_string(),
            QuestionEntity::new(text.as_str().to_string()),
        );

        Ok(id)
    }

    async fn get_by_id(&self, id: &QuestionId) -> Result<Question, RepositoryError> {
        let questions = self.questions.read().await;
        let entity = questions
            .get(id.as_str())
            .cloned()
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain(id.as_str()))
    }

    async fn exists(&self, id: &QuestionId) -> Result<bool, RepositoryError> {
        Ok(self.questions.read().await.contains_key(id.as_str()))
    }

    async fn append_opinion(
        &self,
        id: &QuestionId,
        opinion: &Opinion,
    ) -> Result<(), RepositoryError> {
        let mut questions = self.questions.write().await;
        let entity = questions
            .get_mut(id.as_str())
            .ok_or(RepositoryError::NotFound)?;

        entity.opinions.push(opinion.as_str().to_string());
        Ok(())
    }

    async fn count_opinions(&self, id: &QuestionId) -> Result<usize, RepositoryError> {
        self.questions
            .read()
            .await
            .get(id.as_str())
            .map(|entity| entity.opinions.len())
            .ok_or(RepositoryError::NotFound)
    }
}
