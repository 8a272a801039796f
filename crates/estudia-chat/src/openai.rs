//! OpenAI-compatible provider.
//!
//! Works against the standard `/chat/completions` endpoint, so any
//! OpenAI-compatible gateway can stand in via [`OpenAiProvider::with_base_url`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::provider::{ChatTurn, ModelProvider, ProviderError, TurnRole};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// OpenAI API provider.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiProvider {
    /// Create a provider against the official OpenAI endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Create with a custom base URL (for compatible APIs).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Set the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Convert controller turns to OpenAI wire format.
    fn convert_turns(turns: &[ChatTurn]) -> Vec<OpenAiMessage> {
        turns
            .iter()
            .map(|t| OpenAiMessage {
                role: match t.role {
                    TurnRole::System => "system".to_string(),
                    TurnRole::User => "user".to_string(),
                    TurnRole::Assistant => "assistant".to_string(),
                },
                content: t.content.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl ModelProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, ProviderError> {
        debug!("OpenAI completion with model: {}", self.model);

        let request = OpenAiChatRequest {
            model: self.model.clone(),
            messages: Self::convert_turns(turns),
            temperature: self.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status,
                message: body,
            });
        }

        let chat_response: OpenAiChatResponse = response.json().await?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::InvalidResponse("No choices in response".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAiChatRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> Vec<ChatTurn> {
        vec![
            ChatTurn::system("Eres un tutor PMP."),
            ChatTurn::user("¿Qué es el PMBOK?"),
        ]
    }

    #[test]
    fn provider_defaults() {
        let provider = OpenAiProvider::new("sk-test");
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.model, DEFAULT_MODEL);
    }

    #[test]
    fn provider_builders() {
        let provider = OpenAiProvider::with_base_url("sk-test", "http://custom:8080/v1")
            .with_model("gpt-4o")
            .with_temperature(0.2);
        assert_eq!(provider.base_url, "http://custom:8080/v1");
        assert_eq!(provider.model, "gpt-4o");
        assert!((provider.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn turn_conversion_keeps_order_and_roles() {
        let wire = OpenAiProvider::convert_turns(&sample_context());
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].role, "system");
        assert_eq!(wire[1].role, "user");
        assert_eq!(wire[1].content, "¿Qué es el PMBOK?");
    }

    #[tokio::test]
    async fn complete_returns_first_choice_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"El PMBOK es la guía de fundamentos."}}]}"#,
            )
            .create_async()
            .await;

        let provider = OpenAiProvider::with_base_url("sk-test", server.url());
        let reply = provider.complete(&sample_context()).await.unwrap();

        assert_eq!(reply, "El PMBOK es la guía de fundamentos.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn complete_maps_non_success_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let provider = OpenAiProvider::with_base_url("sk-test", server.url());
        let err = provider.complete(&sample_context()).await.unwrap_err();

        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "rate limited");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn complete_rejects_empty_choices() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let provider = OpenAiProvider::with_base_url("sk-test", server.url());
        let err = provider.complete(&sample_context()).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }
}
