use openai::client::DEFAULT_BASE_URL;
use openai::summarizer::DEFAULT_MODEL;

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: API credential; summaries answer 500 while it is missing
/// - SUMMARY_MODEL: Chat model name (default: "gpt-4o-mini")
/// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        let config = Self::from_values(
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("SUMMARY_MODEL").ok(),
            std::env::var("OPENAI_BASE_URL").ok(),
        );

        if config.api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; summaries are disabled");
        }

        config
    }

    fn from_values(
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        let non_blank = |value: String| {
            let trimmed = value.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };

        Self {
            api_key: api_key.and_then(non_blank),
            model: model
                .and_then(non_blank)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url
                .and_then(non_blank)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}
