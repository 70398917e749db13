use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::question::errors::QuestionError;
use crate::domain::question::repository::QuestionRepository;
use crate::domain::question::use_cases::count_opinions::{
    CountOpinionsParams, CountOpinionsUseCase,
};

pub struct CountOpinionsUseCaseImpl {
    pub repository: Arc<dyn QuestionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CountOpinionsUseCase for CountOpinionsUseCaseImpl {
    async fn execute(&self, params: CountOpinionsParams) -> Result<usize, QuestionError> {
        let count = self
            .repository
            .count_opinions(&params.question_id)
            .await
            .map_err(QuestionError::from_repository)?;

        self.logger.debug(&format!(
            "Question {} has {} opinions",
            params.question_id, count
        ));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::question::model::Question;
    use crate::domain::question::value_objects::{Opinion, QuestionId, QuestionText};
    use mockall::mock;

    mock! {
        pub QuestionRepo {}

        #[async_trait]
        impl QuestionRepository for QuestionRepo {
            async fn create(&self, text: &QuestionText) -> Result<QuestionId, RepositoryError>;
            async fn get_by_id(&self, id: &QuestionId) -> Result<Question, RepositoryError>;
            async fn exists(&self, id: &QuestionId) -> Result<bool, RepositoryError>;
            async fn append_opinion(&self, id: &QuestionId, opinion: &Opinion) -> Result<(), RepositoryError>;
            async fn count_opinions(&self, id: &QuestionId) -> Result<usize, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_count_from_repository() {
        let mut mock_repo = MockQuestionRepo::new();
        mock_repo
            .expect_count_opinions()
            .withf(|id| id.as_str() == "q2")
            .returning(|_| Ok(5));

        let use_case = CountOpinionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let count = use_case
            .execute(CountOpinionsParams {
                question_id: QuestionId::new("q2"),
            })
            .await
            .unwrap();

        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn should_return_not_found_when_question_missing() {
        let mut mock_repo = MockQuestionRepo::new();
        mock_repo
            .expect_count_opinions()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = CountOpinionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CountOpinionsParams {
                question_id: QuestionId::new("q9"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), QuestionError::NotFound));
    }
}
