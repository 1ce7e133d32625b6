//! Chat assistant backed by a hosted generative model

pub mod gemini;
pub mod models;
pub mod service;

pub use gemini::GeminiClient;
pub use service::AssistantService;
