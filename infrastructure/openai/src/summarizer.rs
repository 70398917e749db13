use async_trait::async_trait;
use serde_json::json;

use business::domain::summary::errors::SummaryError;
use business::domain::summary::prompt::SummaryPrompt;
use business::domain::summary::services::SummarizerService;

use crate::client::OpenAIClient;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 400;

/// Writes opinion summaries through the chat completions API.
pub struct SummarizerOpenAI {
    client: OpenAIClient,
    model: String,
}

impl SummarizerOpenAI {
    pub fn new(client: OpenAIClient, model: String) -> Self {
        Self { client, model }
    }

    fn build_body(&self, prompt: &SummaryPrompt) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user},
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        })
    }

    fn parse_response(data: &serde_json::Value) -> Result<String, SummaryError> {
        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                SummaryError::GenerationFailed("response had no message content".to_string())
            })
    }
}

#[async_trait]
impl SummarizerService for SummarizerOpenAI {
    fn is_configured(&self) -> bool {
        self.client.has_api_key()
    }

    async fn summarize(&self, prompt: &SummaryPrompt) -> Result<String, SummaryError> {
        let auth_header = self.client.auth_header().ok_or(SummaryError::MissingApiKey)?;

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", auth_header)
            .json(&self.build_body(prompt))
            .send()
            .await
            .map_err(|e| SummaryError::GenerationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SummaryError::GenerationFailed(format!(
                "upstream returned {}: {}",
                status, detail
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SummaryError::GenerationFailed(e.to_string()))?;

        Self::parse_response(&data)
    }
}
