// src/providers/openai.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::OpenAiConfig;
use crate::errors::{FeedbackError, Result};
use crate::prompt::{self, ChatMessage};
use crate::providers::FeedbackProvider;

/// A provider for interacting with OpenAI's multimodal chat models.
pub struct OpenAiProvider {
    client: Client,
    config: OpenAiConfig,
}

#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

impl OpenAiProvider {
    /// Creates a new `OpenAiProvider`.
    pub fn new(client: Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }
}

/// Pulls the trimmed text of the first choice out of a chat-completion
/// response body.
fn extract_feedback(resp: OpenAiResponse) -> Result<String> {
    let output = resp
        .choices
        .first()
        .map(|c| c.message.content.trim().to_string())
        .ok_or_else(|| {
            FeedbackError::UnexpectedResponse("No choices in response".to_string())
        })?;

    if output.is_empty() {
        return Err(FeedbackError::EmptyResponse);
    }

    Ok(output)
}

#[async_trait]
impl FeedbackProvider for OpenAiProvider {
    /// Calls the chat-completions API with the fixed critique prompt and
    /// returns the model's trimmed response text.
    async fn critique(&self, image_bytes: &[u8]) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );

        log::info!("📡 Calling OpenAI: {} with model: {}", url, self.config.model);

        let body = OpenAiRequest {
            model: self.config.model.clone(),
            messages: prompt::build_messages(image_bytes),
            max_tokens: 2000,
            temperature: 0.7,
        };

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();

        log::info!("📥 OpenAI response status: {}", status);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(FeedbackError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let openai_resp: OpenAiResponse = resp.json().await?;

        extract_feedback(openai_resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(content: &str) -> OpenAiResponse {
        OpenAiResponse {
            choices: vec![Choice {
                message: MessageContent {
                    content: content.to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_extract_feedback_trims_first_choice() {
        let resp = response_with("  Great line work!  ");
        assert_eq!(extract_feedback(resp).unwrap(), "Great line work!");
    }

    #[test]
    fn test_extract_feedback_no_choices() {
        let resp = OpenAiResponse { choices: vec![] };
        assert!(matches!(
            extract_feedback(resp),
            Err(FeedbackError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_extract_feedback_empty_content() {
        let resp = response_with("   ");
        assert!(matches!(
            extract_feedback(resp),
            Err(FeedbackError::EmptyResponse)
        ));
    }

    #[test]
    fn test_response_deserializes_from_api_shape() {
        let body = serde_json::json!({
            "id": "chatcmpl-123",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "Your proportions are solid."
                    },
                    "finish_reason": "stop"
                }
            ]
        });

        let resp: OpenAiResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            extract_feedback(resp).unwrap(),
            "Your proportions are solid."
        );
    }
}
