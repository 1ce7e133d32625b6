use std::sync::Arc;

use crate::domain::GenerativeModel;

pub const EMPTY_MESSAGE_RESPONSE: &str = "Empty message received.";
pub const UNAVAILABLE_RESPONSE: &str =
    "AI system is currently unavailable. Please try again later.";

/// Wrap a visitor question in the manuscript assistant persona
pub fn build_prompt(message: &str) -> String {
    format!(
        "\nYou are a helpful assistant for the Manuscript Explorer app.\n\
         You are an expert in Indian manuscripts, ancient history, Ayurveda, Vedas, and Sanskrit texts.\n\
         Answer clearly and briefly.\n\
         \n\
         User Question: {}\n",
        message
    )
}

/// Relays chat messages to the hosted model. Built once at startup.
#[derive(Clone)]
pub struct AssistantService {
    model: Arc<dyn GenerativeModel>,
}

impl AssistantService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Never fails: model errors are logged and replaced by a fixed answer
    pub async fn ask(&self, message: Option<&str>) -> String {
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => return EMPTY_MESSAGE_RESPONSE.to_string(),
        };

        match self.model.generate(&build_prompt(message)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Assistant model error: {}", e);
                UNAVAILABLE_RESPONSE.to_string()
            }
        }
    }
}
