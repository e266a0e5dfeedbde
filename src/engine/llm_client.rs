use std::time::Duration;

use anyhow::Result;
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::prompt_builder::ChatPrompt;

pub const API_KEY_ENV: &str = "SPORTSYNC_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Base URL of an OpenAI-compatible API, without the trailing route.
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:1234/v1".into(),
            model: "local-model".into(),
            temperature: 0.7,
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl LlmSettings {
    /// Configured key, or the one in the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
    }

    fn url(&self, route: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), route)
    }
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service answered with status {0}")]
    Status(u16),
    #[error("response had no choices")]
    NoChoices,
    #[error("assistant is unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can turn a prompt into reply text.
pub trait TextGenerator: Send {
    fn generate(&self, prompt: &ChatPrompt) -> Result<String, ChatError>;

    fn test_connection(&self) -> Result<String>;
}

#[derive(Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub temperature: f32,
}

#[derive(Serialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionRequest {
    pub fn from_prompt(settings: &LlmSettings, prompt: &ChatPrompt) -> Self {
        Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
            messages: vec![
                CompletionMessage {
                    role: "system".into(),
                    content: prompt.system.clone(),
                },
                CompletionMessage {
                    role: "user".into(),
                    content: prompt.user.clone(),
                },
            ],
        }
    }
}

impl ChatCompletionResponse {
    /// Text of the first choice. A missing `content` counts as empty.
    pub fn into_text(self) -> Result<String, ChatError> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or(ChatError::NoChoices)
    }
}

pub struct LlmClient {
    client: Client,
    settings: LlmSettings,
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self { client, settings })
    }
}

impl TextGenerator for LlmClient {
    fn generate(&self, prompt: &ChatPrompt) -> Result<String, ChatError> {
        let req = ChatCompletionRequest::from_prompt(&self.settings, prompt);
        let url = self.settings.url("chat/completions");
        debug!("POST {} model={}", url, self.settings.model);

        let mut builder = self.client.post(&url).json(&req);
        if let Some(key) = self.settings.resolved_api_key() {
            builder = builder.bearer_auth(key);
        }

        let resp = builder.send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        resp.json::<ChatCompletionResponse>()?.into_text()
    }

    fn test_connection(&self) -> Result<String> {
        let mut builder = self.client.get(self.settings.url("models"));
        if let Some(key) = self.settings.resolved_api_key() {
            builder = builder.bearer_auth(key);
        }

        let resp: serde_json::Value = builder.send()?.error_for_status()?.json()?;

        Ok(format!(
            "Connected ({} models available)",
            resp["data"].as_array().map(|a| a.len()).unwrap_or(0)
        ))
    }
}

/// Stand-in used when the real client cannot be built.
pub struct OfflineGenerator {
    pub reason: String,
}

impl TextGenerator for OfflineGenerator {
    fn generate(&self, _prompt: &ChatPrompt) -> Result<String, ChatError> {
        Err(ChatError::Unavailable(self.reason.clone()))
    }

    fn test_connection(&self) -> Result<String> {
        anyhow::bail!("assistant is unavailable: {}", self.reason)
    }
}

pub fn build_generator(settings: &LlmSettings) -> Box<dyn TextGenerator> {
    match LlmClient::new(settings.clone()) {
        Ok(client) => Box::new(client),
        Err(e) => {
            log::error!("Could not build text-generation client: {}", e);
            Box::new(OfflineGenerator {
                reason: e.to_string(),
            })
        }
    }
}
