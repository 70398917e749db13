use super::value_objects::{Opinion, QuestionId, QuestionText};

/// A topic awaiting opinions. Opinions keep submission order and only grow.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub text: QuestionText,
    pub opinions: Vec<Opinion>,
}

impl Question {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: QuestionId, text: QuestionText, opinions: Vec<Opinion>) -> Self {
        Self { id, text, opinions }
    }

    pub fn opinion_count(&self) -> usize {
        self.opinions.len()
    }

    /// Relative link to the page where opinions are collected.
    pub fn share_link(id: &QuestionId) -> String {
        format!("/question/{}", id)
    }
}
