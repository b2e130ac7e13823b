use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::context::RecommendationRequest;
use super::selector::RecommendationSource;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("backend returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("backend API error: status={status}, body={body}")]
    Api { status: u16, body: String },

    #[error("backend did not answer within {0:?}")]
    Timeout(std::time::Duration),

    #[error("recommendation request cancelled")]
    Cancelled,
}

/// Source of recommendation payloads.
///
/// Backends return raw JSON; the selector validates it against the
/// recommendation schema before anything reaches the caller.
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Reported as the outcome source when this backend's output is accepted.
    fn source(&self) -> RecommendationSource {
        RecommendationSource::Generative
    }

    async fn generate(&self, request: &RecommendationRequest) -> Result<Value, BackendError>;
}
