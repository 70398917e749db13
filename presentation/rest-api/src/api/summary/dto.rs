use poem_openapi::Object;

use business::domain::summary::model::Summary;

#[derive(Debug, Clone, Object)]
pub struct SummaryResponse {
    /// Model-written summary, or a notice when there are too few opinions
    pub summary: String,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            summary: summary.text,
        }
    }
}
