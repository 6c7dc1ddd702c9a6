// src/providers/mod.rs

use crate::errors::Result;
use async_trait::async_trait;

pub mod openai;

/// The seam between the HTTP layer and the multimodal model backend.
///
/// Object-safe so handlers can hold an `Arc<dyn FeedbackProvider>` and tests
/// can substitute a mock.
#[async_trait]
pub trait FeedbackProvider: Send + Sync {
    /// Produces critique text for the given raw image bytes.
    ///
    /// The bytes are assumed to be a valid image encoding; they are not
    /// inspected here.
    async fn critique(&self, image_bytes: &[u8]) -> Result<String>;
}
