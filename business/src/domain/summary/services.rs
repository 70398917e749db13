use async_trait::async_trait;

use super::errors::SummaryError;
use super::prompt::SummaryPrompt;

/// Service port for the external completion model that writes summaries.
#[async_trait]
pub trait SummarizerService: Send + Sync {
    /// Whether a credential for the model is available.
    fn is_configured(&self) -> bool;

    /// Sends one completion request and returns the trimmed model text.
    async fn summarize(&self, prompt: &SummaryPrompt) -> Result<String, SummaryError>;
}
