use business::domain::question::model::Question;
use business::domain::question::value_objects::{Opinion, QuestionId, QuestionText};

/// Stored shape of a question inside the in-memory store.
#[derive(Debug, Clone)]
pub struct QuestionEntity {
    pub question: String,
    pub opinions: Vec<String>,
}

impl QuestionEntity {
    pub fn new(question: String) -> Self {
        Self {
            question,
            opinions: Vec::new(),
        }
    }

    pub fn into_domain(self, id: &str) -> Question {
        Question::from_repository(
            QuestionId::new(id),
            QuestionText::from_repository(self.question),
            self.opinions
                .into_iter()
                .map(Opinion::from_repository)
                .collect(),
        )
    }
}
