use crate::domain::shared::text::truncate_chars;

use super::errors::QuestionError;

/// Longest opinion accepted, in characters. Longer submissions are cut.
pub const MAX_OPINION_CHARS: usize = 4000;

/// Process-unique question identifier, e.g. `q1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the identifier for the `sequence`-th question of the process.
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("q{}", sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed, non-empty question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    pub fn parse(raw: &str) -> Result<Self, QuestionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::QuestionEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps text already validated by the store.
    pub fn from_repository(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trimmed, non-empty opinion capped at [`MAX_OPINION_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opinion(String);

impl Opinion {
    pub fn parse(raw: &str) -> Result<Self, QuestionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::OpinionEmpty);
        }
        Ok(Self(truncate_chars(trimmed, MAX_OPINION_CHARS)))
    }

    pub fn from_repository(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
