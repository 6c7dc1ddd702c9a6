// src/prompt.rs
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Persona given to the model for every critique request.
pub const SYSTEM_PROMPT: &str = "You are an experienced art instructor focusing on basic anatomy and perspective for aspiring comic book artists. Provide detailed, constructive, encouraging feedback on artwork.";

/// Instructional text that accompanies the uploaded image.
pub const USER_PROMPT: &str = "Please review this drawing and provide specific, constructive feedback about the anatomy and perspective. Focus on 3-4 key areas for improvement if there are any while also mentioning what works well.";

/// Returned to the caller whenever the remote call cannot be completed.
pub const FALLBACK_FEEDBACK: &str = "Sorry, there was an error processing your request.";

/// A single chat message in the outbound prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

/// OpenAI accepts either a plain string or a list of typed parts as message
/// content, so this serializes untagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

pub fn encode_image_to_base64(image_bytes: &[u8]) -> String {
    STANDARD.encode(image_bytes)
}

/// Builds the fixed two-message critique prompt: the instructor persona
/// followed by a user message carrying the instruction text and the image
/// embedded as a base64 data URI.
pub fn build_messages(image_bytes: &[u8]) -> Vec<ChatMessage> {
    let base64_image = encode_image_to_base64(image_bytes);

    vec![
        ChatMessage {
            role: "system".to_string(),
            content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
        },
        ChatMessage {
            role: "user".to_string(),
            content: MessageContent::Parts(vec![
                ContentPart::Text {
                    text: USER_PROMPT.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: format!("data:image/jpeg;base64,{}", base64_image),
                    },
                },
            ]),
        },
    ]
}
