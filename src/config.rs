// src/config.rs
use crate::errors::{FeedbackError, Result};

/// Configuration for the OpenAI-compatible chat-completion backend.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai: OpenAiConfig,
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            FeedbackError::Config(
                "No API key configured. Please set OPENAI_API_KEY.".to_string(),
            )
        })?;

        let api_base = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(AppConfig {
            openai: OpenAiConfig {
                api_base,
                api_key,
                model,
            },
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Runs both cases in one test since the environment is process-global.
    #[test]
    fn test_from_env_requires_api_key_and_applies_defaults() {
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
            std::env::remove_var("OPENAI_API_BASE");
            std::env::remove_var("OPENAI_MODEL");
            std::env::remove_var("BIND_ADDR");
        }

        assert!(matches!(
            AppConfig::from_env(),
            Err(FeedbackError::Config(_))
        ));

        unsafe {
            std::env::set_var("OPENAI_API_KEY", "sk-test");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.openai.api_key, "sk-test");
        assert_eq!(config.openai.api_base, "https://api.openai.com/v1");
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");

        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }
    }
}
