// src/api/handlers/mod.rs
mod feedback;
mod health;

pub use feedback::{feedback, FeedbackResponse};
pub use health::health_check;
