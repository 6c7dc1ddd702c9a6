// src/api/state.rs
use crate::config::AppConfig;
use crate::providers::openai::OpenAiProvider;
use crate::providers::FeedbackProvider;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn FeedbackProvider>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let provider = OpenAiProvider::new(Client::new(), config.openai.clone());
        Self {
            config: Arc::new(config),
            provider: Arc::new(provider),
        }
    }

    /// Builds state around an arbitrary provider, used by tests to inject a
    /// mock backend.
    pub fn with_provider(config: AppConfig, provider: Arc<dyn FeedbackProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
