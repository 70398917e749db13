/// Fewest opinions worth sending to the model.
pub const MIN_OPINIONS_FOR_SUMMARY: usize = 2;

pub const NOT_ENOUGH_OPINIONS_MESSAGE: &str = "Not enough opinions to generate a summary.";

/// Synthesis of all opinions on a question. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub text: String,
    /// False when the placeholder was returned without calling the model.
    pub generated: bool,
}

impl Summary {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            generated: true,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            text: NOT_ENOUGH_OPINIONS_MESSAGE.to_string(),
            generated: false,
        }
    }
}
