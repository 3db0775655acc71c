//! Free-form marketing questions answered by an LLM.
//!
//! [`FaqResponder::answer`] never fails: provider errors, empty replies and
//! a missing API key all turn into [`FALLBACK_ANSWER`].

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't generate a response. Please try again later.";

/// Text generation backend.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Client for the Gemini `generateContent` API. One attempt per question.
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(config: &LlmConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Builds the provider when the configured key variable is set.
    pub fn from_env(config: &LlmConfig) -> Result<Option<Self>> {
        match std::env::var(&config.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(Some(Self::new(config, key)?)),
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl AnswerProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let res = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let detail = res.text().await.unwrap_or_default();
            return Err(Error::Llm(format!("HTTP {}: {}", status, detail)));
        }

        let response: GenerateResponse = res.json().await?;
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default();
        Ok(text)
    }
}

#[derive(Clone, Default)]
pub struct FaqResponder {
    provider: Option<Arc<dyn AnswerProvider>>,
}

impl FaqResponder {
    pub fn new(provider: Arc<dyn AnswerProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Responder with no backend; every answer is the fallback.
    pub fn disabled() -> Self {
        Self { provider: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn answer(&self, question: &str) -> String {
        let Some(provider) = &self.provider else {
            log::warn!("No LLM provider configured, returning fallback answer");
            return FALLBACK_ANSWER.to_string();
        };

        let prompt = format!("Answer this marketing question: {}", question);
        match provider.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                log::warn!("LLM returned an empty answer");
                FALLBACK_ANSWER.to_string()
            }
            Err(e) => {
                log::error!("Error: {}", e);
                FALLBACK_ANSWER.to_string()
            }
        }
    }
}
