use crate::domain::question::model::Question;
use crate::domain::shared::text::truncate_chars;

/// Per-opinion character budget inside the prompt.
pub const MAX_PROMPT_OPINION_CHARS: usize = 2000;

pub const SYSTEM_PROMPT: &str = "You help groups find signal in feedback.";

// Ends with a space after the closing parenthesis.
const INSTRUCTIONS: &str = "You are an AI assistant tasked with providing a concise and honest \
    summary of a set of anonymous opinions with a bit of (british) humour. Also provide a general \
    sentiment (positive, negative, mixed) towards the topic asked (this should come first). ";

/// System/user message pair sent to the completion model.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryPrompt {
    pub system: String,
    pub user: String,
}

impl SummaryPrompt {
    pub fn build(question: &Question) -> Self {
        let opinion_lines = question
            .opinions
            .iter()
            .map(|op| format!("- {}", truncate_chars(op.as_str(), MAX_PROMPT_OPINION_CHARS)))
            .collect::<Vec<_>>()
            .join("\n");

        let user = format!(
            "{}\n\nQuestion:\n{}\n\nOpinions:\n{}\n",
            INSTRUCTIONS,
            question.text.as_str(),
            opinion_lines
        );

        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }
}
