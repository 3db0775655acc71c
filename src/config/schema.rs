use crate::selector::TableSelector;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    #[validate(length(min = 1))]
    pub name: String,

    /// Page holding the benchmark tables, fetched once at startup
    #[serde(default = "default_source_url")]
    pub source_url: String,

    #[serde(default)]
    pub table_selector: TableSelector,

    #[serde(default = "default_timeout")]
    #[validate(range(min = 1))]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Optional path to a parent configuration file to inherit from
    #[serde(default)]
    pub extends: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            source_url: default_source_url(),
            table_selector: TableSelector::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            llm: LlmConfig::default(),
            output: None,
            extends: None,
        }
    }
}

/// Gemini-compatible `generateContent` endpoint used for FAQ answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Environment variable holding the API key; FAQ answers fall back to a
    /// fixed message when it is unset.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            model: default_llm_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputConfig {
    Console,
    Json { path: String },
}

pub(crate) fn default_name() -> String {
    "ppc-trends".to_string()
}

pub(crate) fn default_source_url() -> String {
    "https://databox.com/ppc-industry-benchmarks".to_string()
}

pub(crate) fn default_timeout() -> u64 {
    10
}

pub(crate) fn default_user_agent() -> String {
    "ppc-trends/0.1".to_string()
}

fn default_llm_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_llm_model() -> String {
    "gemini-pro".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_llm_timeout() -> u64 {
    30
}
