use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl OpenAIClient {
    /// Blank keys are treated as absent.
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
