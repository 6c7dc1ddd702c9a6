// src/api/handlers/feedback.rs
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Result};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::prompt::FALLBACK_FEEDBACK;

#[derive(Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// Accepts an artwork upload and relays it to the model for critique.
///
/// The whole upload is buffered in memory; nothing is written to disk. Remote
/// failures never surface as an error status: the handler responds 200 with a
/// fixed fallback sentence instead, matching the behavior the frontend
/// expects.
pub async fn feedback(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let mut image_bytes = web::BytesMut::new();

    // A single file field is expected; only the first one is read.
    if let Some(mut field) = payload.try_next().await? {
        while let Some(chunk) = field.try_next().await? {
            image_bytes.extend_from_slice(&chunk);
        }
    }

    let feedback = match state.provider.critique(&image_bytes).await {
        Ok(text) => text,
        Err(e) => {
            log::error!("Failed to obtain feedback: {}", e);
            FALLBACK_FEEDBACK.to_string()
        }
    };

    Ok(HttpResponse::Ok().json(FeedbackResponse { feedback }))
}
