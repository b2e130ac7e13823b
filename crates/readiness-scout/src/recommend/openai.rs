use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use super::backend::{BackendError, RecommendationBackend};
use super::context::RecommendationRequest;
use crate::config::GenerativeConfig;

const SYSTEM_PROMPT: &str =
    "You are a B2B sales strategist specializing in AI/ML infrastructure sales.";

const RESPONSE_SHAPE: &str = r#"{
    "strategy": "High-level approach (2-3 sentences)",
    "messaging": "Core positioning message",
    "priority": "high | medium | low",
    "timeline": "Immediate | 0-3 months | 3-6 months | 6-12 months",
    "focus_areas": ["Focus area 1", "Focus area 2"],
    "talking_points": ["Specific value proposition 1", "Specific value proposition 2"],
    "objections": [{"objection": "Likely concern", "response": "How to address it"}],
    "next_steps": ["Immediate action", "Follow-up action"]
}"#;

/// Chat-completions backend for OpenAI and API-compatible gateways.
#[derive(Clone)]
pub struct OpenAiCompatibleBackend {
    config: GenerativeConfig,
    client: Client,
}

impl OpenAiCompatibleBackend {
    pub fn new(config: GenerativeConfig) -> Result<Self, BackendError> {
        if config.api_key.trim().is_empty() {
            return Err(BackendError::Config("api key is empty".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

/// User prompt for one assessment.
pub fn build_prompt(request: &RecommendationRequest) -> String {
    format!(
        "Based on the following company analysis, generate specific, actionable sales \
         recommendations.\n\n{summary}\n\
         Respond with a single JSON object with exactly this structure:\n{RESPONSE_SHAPE}\n\n\
         Rules for talking_points:\n\
         - Do NOT start with \"You\", \"Your\", \"You're\", \"You have\" or similar.\n\
         - Start with factual statements or direct benefits, e.g. \
         \"Aggressive AI talent hiring (42 open positions)\".\n\
         - Keep them crisp, factual and professional.\n\n\
         Make the recommendations specific to the {tier} readiness tier and the {vertical} vertical.",
        summary = request.analysis_summary(),
        tier = request.tier,
        vertical = request.vertical,
    )
}

#[async_trait]
impl RecommendationBackend for OpenAiCompatibleBackend {
    fn name(&self) -> &'static str {
        "openai_compatible"
    }

    async fn generate(&self, request: &RecommendationRequest) -> Result<Value, BackendError> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_prompt(request)},
            ],
            "temperature": 0.7,
            "max_tokens": 1500,
            "response_format": {"type": "json_object"},
        });

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(BackendError::Api { status, body });
        }

        let parsed: ChatCompletionResponse = res.json().await?;
        let content = parsed.into_content()?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_content(self) -> Result<String, BackendError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                BackendError::InvalidResponse("chat completion returned no content".to_string())
            })
    }
}
